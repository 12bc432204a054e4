use gallery::prelude::*;

use crate::sketches::common::palette::{INK, PAPER};

// 10 PRINT CHR$(205.5+RND(1)); : GOTO 10

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Print10",
    display_name: "10 PRINT",
    play_mode: PlayMode::Once,
    fps: 30.0,
    w: 600,
    h: 600,
};

const CELL: f32 = 20.0;

pub struct Print10 {
    rng: SketchRng,
}

pub fn init() -> Print10 {
    Print10 {
        rng: gallery::runtime::rng::from_seed(0),
    }
}

impl Sketch for Print10 {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        surface.background(PAPER);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        surface.stroke(INK);
        surface.stroke_weight(CELL * 0.15);

        let cols = (ctx.width() / CELL).ceil() as u32;
        let rows = (ctx.height() / CELL).ceil() as u32;

        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * CELL;
                let y = row as f32 * CELL;
                if self.rng.random_bool(0.5) {
                    surface
                        .line(Vec2::new(x, y), Vec2::new(x + CELL, y + CELL));
                } else {
                    surface
                        .line(Vec2::new(x + CELL, y), Vec2::new(x, y + CELL));
                }
            }
        }
    }
}
