use gallery::prelude::*;

use crate::sketches::common::palette::{self, INK, MONDRIAN, PAPER};

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Mondrian",
    display_name: "Mondrian",
    play_mode: PlayMode::Once,
    fps: 30.0,
    w: 600,
    h: 600,
};

const MARGIN: f32 = 12.0;
const MIN_SIDE: f32 = 60.0;
const MAX_DEPTH: u32 = 6;
const COLOR_CHANCE: f64 = 0.22;

#[derive(Clone, Copy, Debug)]
struct Block {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    depth: u32,
}

pub struct Mondrian {
    rng: SketchRng,
    blocks: Vec<(Block, Color)>,
}

pub fn init() -> Mondrian {
    Mondrian {
        rng: gallery::runtime::rng::from_seed(0),
        blocks: vec![],
    }
}

impl Mondrian {
    fn subdivide(&mut self, root: Block) {
        self.blocks.clear();
        let mut pending = vec![root];

        while let Some(block) = pending.pop() {
            let can_split_x = block.w > MIN_SIDE * 2.0;
            let can_split_y = block.h > MIN_SIDE * 2.0;
            let keep_going = block.depth < 2
                || self.rng.random_bool(0.75_f64.powi(block.depth as i32 - 1));

            let splittable = can_split_x || can_split_y;
            if block.depth >= MAX_DEPTH || !keep_going || !splittable {
                let color = if self.rng.random_bool(COLOR_CHANCE) {
                    palette::pick(&mut self.rng, &MONDRIAN)
                } else {
                    PAPER
                };
                self.blocks.push((block, color));
                continue;
            }

            let vertical = match (can_split_x, can_split_y) {
                (true, false) => true,
                (false, true) => false,
                _ => block.w >= block.h || self.rng.random_bool(0.3),
            };

            let depth = block.depth + 1;
            if vertical {
                let at = self.rng.random_range(MIN_SIDE..block.w - MIN_SIDE);
                pending.push(Block { w: at, depth, ..block });
                pending.push(Block {
                    x: block.x + at,
                    w: block.w - at,
                    depth,
                    ..block
                });
            } else {
                let at = self.rng.random_range(MIN_SIDE..block.h - MIN_SIDE);
                pending.push(Block { h: at, depth, ..block });
                pending.push(Block {
                    y: block.y + at,
                    h: block.h - at,
                    depth,
                    ..block
                });
            }
        }
    }
}

impl Sketch for Mondrian {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.subdivide(Block {
            x: MARGIN,
            y: MARGIN,
            w: ctx.width() - MARGIN * 2.0,
            h: ctx.height() - MARGIN * 2.0,
            depth: 0,
        });
        surface.background(PAPER);
    }

    fn draw(&mut self, surface: &mut dyn Surface, _ctx: &Context) {
        surface.stroke(INK);
        surface.stroke_weight(8.0);

        for (block, color) in &self.blocks {
            surface.fill(*color);
            surface.rect(block.x, block.y, block.w, block.h);
        }
    }
}
