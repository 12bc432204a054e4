use gallery::prelude::*;

use crate::sketches::common::palette::{self, INK, TRIAD};

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Sierpinski",
    display_name: "Chaos Game",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 600,
    h: 600,
};

const POINTS_PER_FRAME: usize = 400;
const WARMUP: usize = 16;

pub struct Sierpinski {
    rng: SketchRng,
    vertices: [Vec2; 3],
    colors: [Color; 3],
    position: Vec2,
}

pub fn init() -> Sierpinski {
    Sierpinski {
        rng: gallery::runtime::rng::from_seed(0),
        vertices: [Vec2::ZERO; 3],
        colors: TRIAD,
        position: Vec2::ZERO,
    }
}

impl Sierpinski {
    /// Move halfway toward a random vertex. Returns the vertex index chosen.
    fn step(&mut self) -> usize {
        let i = self.rng.random_range(0..self.vertices.len());
        self.position = self.position.lerp(self.vertices[i], 0.5);
        i
    }
}

impl Sketch for Sierpinski {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();

        let radius = ctx.width().min(ctx.height()) * 0.45;
        let rotation = self.rng.random_range(-0.3..0.3);
        let center = ctx.center() + Vec2::new(0.0, radius * 0.15);

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            let angle = -std::f32::consts::FRAC_PI_2
                + rotation
                + i as f32 * TWO_PI / 3.0;
            *vertex = center + Vec2::from_angle(angle) * radius;
        }

        for color in self.colors.iter_mut() {
            *color = palette::pick(&mut self.rng, &TRIAD).lerp(WHITE, 0.25);
        }

        self.position = self.vertices[0];
        for _ in 0..WARMUP {
            self.step();
        }

        surface.background(INK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, _ctx: &Context) {
        surface.stroke_weight(1.0);

        for _ in 0..POINTS_PER_FRAME {
            let i = self.step();
            surface.stroke(self.colors[i].with_alpha(0.6));
            surface.point(self.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_stays_inside_the_triangle() {
        let mut sketch = init();
        let mut canvas = Canvas::new(SKETCH_CONFIG.w, SKETCH_CONFIG.h);
        let ctx = Context::new([SKETCH_CONFIG.w, SKETCH_CONFIG.h], 3);
        sketch.reset(&mut canvas, &ctx);

        let [a, b, c] = sketch.vertices;
        let area = |p: Vec2, q: Vec2, r: Vec2| {
            (q - p).perp_dot(r - p).abs() / 2.0
        };
        let whole = area(a, b, c);

        for _ in 0..1000 {
            sketch.step();
            let p = sketch.position;
            let parts = area(p, b, c) + area(a, p, c) + area(a, b, p);
            assert!((parts - whole).abs() / whole < 1e-3);
        }
    }
}
