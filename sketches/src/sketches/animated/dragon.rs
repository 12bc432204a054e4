use gallery::prelude::*;

use crate::sketches::common::palette::INK;

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Dragon",
    display_name: "Dragon Curve",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 600,
    h: 600,
};

const GENERATIONS: u32 = 12;
const SEGMENTS_PER_FRAME: usize = 24;
const PADDING: f32 = 40.0;

/// Rewrite `axiom` with the dragon productions `X -> X+YF+` and `Y -> -FX-Y`.
pub fn expand(axiom: &str, generations: u32) -> String {
    let mut current = axiom.to_string();

    for _ in 0..generations {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match symbol {
                'X' => next.push_str("X+YF+"),
                'Y' => next.push_str("-FX-Y"),
                other => next.push(other),
            }
        }
        current = next;
    }

    current
}

/// Walk the turtle over `program`, returning one vertex per `F` plus the
/// origin.
fn trace(program: &str) -> Vec<Vec2> {
    let mut position = Vec2::ZERO;
    let mut heading = Vec2::X;
    let mut vertices = vec![position];

    for symbol in program.chars() {
        match symbol {
            'F' => {
                position += heading;
                vertices.push(position);
            }
            '+' => heading = heading.perp(),
            '-' => heading = -heading.perp(),
            _ => {}
        }
    }

    vertices
}

pub struct Dragon {
    vertices: Vec<Vec2>,
    cursor: usize,
    hue: f32,
}

pub fn init() -> Dragon {
    Dragon {
        vertices: trace(&expand("FX", GENERATIONS)),
        cursor: 0,
        hue: 0.0,
    }
}

impl Dragon {
    fn fit_to(&self, ctx: &Context) -> (Vec2, f32) {
        let (min, max) = self.vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        );
        let extent = (max - min).max(Vec2::ONE);
        let scale = ((ctx.resolution() - PADDING * 2.0) / extent).min_element();
        let offset = ctx.center() - (min + max) / 2.0 * scale;
        (offset, scale)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor + 1 >= self.vertices.len()
    }
}

impl Sketch for Dragon {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let mut rng = ctx.rng();
        self.cursor = 0;
        self.hue = rng.random();
        surface.background(INK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        if self.is_complete() {
            return;
        }

        let (offset, scale) = self.fit_to(ctx);
        let end =
            (self.cursor + SEGMENTS_PER_FRAME).min(self.vertices.len() - 1);
        let total = self.vertices.len() as f32;

        surface.stroke_weight(2.0);
        for i in self.cursor..end {
            let t = i as f32 / total;
            surface.stroke(Color::hsl(self.hue + t * 0.5, 0.65, 0.6));
            surface.line(
                offset + self.vertices[i] * scale,
                offset + self.vertices[i + 1] * scale,
            );
        }

        self.cursor = end;
    }
}
