pub use glam::Vec2;

pub use crate::context::Context;
pub use crate::core::error::{GalleryError, Result};
pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::HashSet;
pub use crate::core::util::TWO_PI;
pub use crate::core::util::constrain;
pub use crate::core::util::lerp;
pub use crate::core::util::map_range;
pub use crate::motion::Noise;
pub use crate::register_sketches;
pub use crate::render::canvas::Canvas;
pub use crate::render::color::{BLACK, Color, TRANSPARENT, WHITE};
pub use crate::render::surface::{RasterImage, Surface};
pub use crate::runtime::events::HostInput;
pub use crate::runtime::host::{Host, HostState};
pub use crate::runtime::registry::{RuntimeRegistry, SketchCategory};
pub use crate::runtime::rng::{Rng, SeedSource, SketchRng};
pub use crate::sketch::{PlayMode, Sketch, SketchConfig};
pub use crate::ternary;
