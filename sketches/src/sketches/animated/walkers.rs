use gallery::prelude::*;

use crate::sketches::common::palette::{self, INK, TRIAD};
use crate::sketches::common::{random_direction, random_point};

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Walkers",
    display_name: "Random Walkers",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 600,
    h: 600,
};

const WALKER_COUNT: usize = 48;
const STEP: f32 = 3.0;
const TURN: f32 = 0.6;

#[derive(Clone, Copy, Debug)]
struct Walker {
    position: Vec2,
    heading: f32,
    color: Color,
}

pub struct Walkers {
    rng: SketchRng,
    walkers: Vec<Walker>,
}

pub fn init() -> Walkers {
    Walkers {
        rng: gallery::runtime::rng::from_seed(0),
        walkers: Vec::with_capacity(WALKER_COUNT),
    }
}

impl Sketch for Walkers {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.walkers.clear();

        for _ in 0..WALKER_COUNT {
            let position = random_point(&mut self.rng, ctx);
            let heading = random_direction(&mut self.rng).to_angle();
            let color = palette::pick(&mut self.rng, &TRIAD);
            self.walkers.push(Walker {
                position,
                heading,
                color,
            });
        }

        surface.background(INK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let size = ctx.resolution();
        surface.stroke_weight(1.5);

        for walker in self.walkers.iter_mut() {
            walker.heading = constrain::wrap(
                walker.heading + self.rng.random_range(-TURN..TURN),
                0.0,
                TWO_PI,
            );
            let next =
                walker.position + Vec2::from_angle(walker.heading) * STEP;

            let wrapped = Vec2::new(
                constrain::wrap(next.x, 0.0, size.x),
                constrain::wrap(next.y, 0.0, size.y),
            );

            surface.stroke(walker.color.with_alpha(0.5));
            if wrapped == next {
                surface.line(walker.position, next);
            }
            walker.position = wrapped;
        }
    }
}
