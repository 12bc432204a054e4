pub mod animated;
pub mod common;
pub mod still;
