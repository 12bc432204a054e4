use glam::Vec2;

use crate::runtime::rng::{self, SketchRng};

/// Read-only view of the host's state handed to every `reset` and `draw`.
pub struct Context {
    size: [u32; 2],
    seed: u64,
    frame_count: u64,
}

impl Context {
    pub fn new(size: [u32; 2], seed: u64) -> Self {
        Self {
            size,
            seed,
            frame_count: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.size[0] as f32
    }

    pub fn height(&self) -> f32 {
        self.size[1] as f32
    }

    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn resolution_u32(&self) -> [u32; 2] {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.resolution() / 2.0
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A generator seeded from the current seed. Each call starts the same
    /// sequence over.
    pub fn rng(&self) -> SketchRng {
        rng::from_seed(self.seed)
    }

    /// Draws since the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub(crate) fn begin_session(&mut self, seed: u64) {
        self.seed = seed;
        self.frame_count = 0;
    }

    pub(crate) fn next_frame(&mut self) {
        self.frame_count += 1;
    }
}
