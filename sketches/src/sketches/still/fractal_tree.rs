use gallery::prelude::*;

use crate::sketches::common::palette::{INK, PAPER};

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "FractalTree",
    display_name: "Fractal Tree",
    play_mode: PlayMode::Once,
    fps: 30.0,
    w: 600,
    h: 600,
};

const MAX_DEPTH: u32 = 11;
const MIN_LENGTH: f32 = 3.0;

#[derive(Clone, Copy, Debug)]
struct Branch {
    start: Vec2,
    angle: f32,
    length: f32,
    depth: u32,
}

pub struct FractalTree {
    rng: SketchRng,
    spread: f32,
    decay: f32,
}

pub fn init() -> FractalTree {
    FractalTree {
        rng: gallery::runtime::rng::from_seed(0),
        spread: 0.4,
        decay: 0.72,
    }
}

impl Sketch for FractalTree {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.spread = self.rng.random_range(0.25..0.6);
        self.decay = self.rng.random_range(0.66..0.76);
        surface.background(PAPER);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let leaf = Color::hsl(self.rng.random_range(0.2..0.45), 0.5, 0.45);

        let mut pending = vec![Branch {
            start: Vec2::new(ctx.center().x, ctx.height() - 20.0),
            angle: -std::f32::consts::FRAC_PI_2,
            length: ctx.height() * 0.25,
            depth: 0,
        }];

        while let Some(branch) = pending.pop() {
            let end = branch.start
                + Vec2::from_angle(branch.angle) * branch.length;
            let t = branch.depth as f32 / MAX_DEPTH as f32;

            surface.stroke(INK.lerp(leaf, t));
            surface.stroke_weight(lerp(9.0, 1.0, t));
            surface.line(branch.start, end);

            let length = branch.length * self.decay;
            if branch.depth >= MAX_DEPTH || length < MIN_LENGTH {
                continue;
            }

            for side in [-1.0, 1.0] {
                let jitter = self.rng.random_range(-0.15..0.15);
                pending.push(Branch {
                    start: end,
                    angle: branch.angle + side * self.spread + jitter,
                    length: length * self.rng.random_range(0.85..1.1),
                    depth: branch.depth + 1,
                });
            }
        }
    }
}
