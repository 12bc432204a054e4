pub mod app;
pub mod events;
pub mod frame_clock;
pub mod host;
pub mod registry;
pub mod rng;
pub mod settings;
pub mod storage;
