use crate::context::Context;
use crate::render::surface::Surface;

/// Static per-sketch descriptor. Each sketch module declares one as
/// `SKETCH_CONFIG`; the host reads it once at mount time.
#[derive(Debug)]
pub struct SketchConfig {
    pub name: &'static str,
    pub display_name: &'static str,
    pub play_mode: PlayMode,
    pub fps: f32,
    pub w: u32,
    pub h: u32,
}

impl SketchConfig {
    pub fn is_looping(&self) -> bool {
        self.play_mode == PlayMode::Loop
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayMode {
    /// `draw` runs once per scheduled frame.
    Loop,
    /// `draw` produces the whole image in one call after each reset.
    Once,
}

/// A generative-art procedure driven by the host.
///
/// `reset` must leave the sketch ready for any number of `draw` calls and is
/// only ever invoked on mount or explicit user action. For looping sketches
/// `draw` performs one incremental step and must tolerate being called
/// indefinitely; for [`PlayMode::Once`] sketches it renders the full image.
pub trait Sketch {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context);

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context);
}
