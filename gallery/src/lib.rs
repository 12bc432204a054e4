#[path = "runtime/context.rs"]
pub mod context;
pub mod core;
pub mod motion;
pub mod render;
#[path = "sketches/registration_macros.rs"]
mod registration_macros;
pub mod runtime;
#[path = "sketches/sketch.rs"]
pub mod sketch;

pub use crate::core::error::{GalleryError, Result};
pub use crate::core::prelude;
pub use crate::core::logging::init_logger;
pub use runtime::app::{render_headless, run_registry};
