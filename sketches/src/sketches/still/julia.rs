use gallery::prelude::*;

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Julia",
    display_name: "Julia Set",
    play_mode: PlayMode::Once,
    fps: 30.0,
    w: 480,
    h: 480,
};

const MAX_ITERATIONS: u32 = 96;
const ESCAPE_RADIUS_SQ: f32 = 16.0;
const VIEW_HALF_WIDTH: f32 = 1.6;

// Constants on or near the Mandelbrot boundary with connected-ish sets
const PRESETS: [[f32; 2]; 6] = [
    [-0.8, 0.156],
    [0.285, 0.01],
    [-0.4, 0.6],
    [-0.70176, -0.3842],
    [0.355, 0.355],
    [-0.835, -0.2321],
];

pub struct Julia {
    c: Vec2,
    hue: f32,
}

pub fn init() -> Julia {
    Julia {
        c: Vec2::from(PRESETS[0]),
        hue: 0.6,
    }
}

/// Smooth escape count for `z -> z^2 + c`, or `None` if the orbit stays
/// bounded.
fn escape_time(mut z: Vec2, c: Vec2) -> Option<f32> {
    for i in 0..MAX_ITERATIONS {
        let len_sq = z.length_squared();
        if len_sq > ESCAPE_RADIUS_SQ {
            let smooth = i as f32 + 1.0
                - (len_sq.ln() * 0.5).ln() / std::f32::consts::LN_2;
            return Some(smooth.max(0.0));
        }
        z = Vec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;
    }
    None
}

impl Sketch for Julia {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let mut rng = ctx.rng();
        let preset = PRESETS[rng.random_range(0..PRESETS.len())];
        self.c = Vec2::from(preset)
            + Vec2::new(
                    rng.random_range(-0.01..0.01),
                    rng.random_range(-0.01..0.01),
                );
        self.hue = rng.random();
        surface.background(BLACK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let [w, h] = ctx.resolution_u32();
        let scale = VIEW_HALF_WIDTH * 2.0 / ctx.width();
        let half_height = ctx.height() * scale / 2.0;

        for y in 0..h {
            for x in 0..w {
                let z = Vec2::new(
                    x as f32 * scale - VIEW_HALF_WIDTH,
                    y as f32 * scale - half_height,
                );
                let color = match escape_time(z, self.c) {
                    Some(n) => {
                        let max = MAX_ITERATIONS as f32;
                        let t = map_range(n, 0.0, max, 0.0, 1.0).sqrt();
                        Color::hsl(self.hue + t * 0.35, 0.7, t * 0.6)
                    }
                    None => BLACK,
                };
                surface.set_pixel(x, y, color);
            }
        }
    }
}
