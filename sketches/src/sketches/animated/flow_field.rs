use gallery::prelude::*;

use crate::sketches::common::palette::PAPER;
use crate::sketches::common::random_point;

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "FlowField",
    display_name: "Flow Field",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 600,
    h: 600,
};

const PARTICLE_COUNT: usize = 300;
const NOISE_SCALE: f32 = 0.0035;
const TIME_SCALE: f32 = 0.002;
const SPEED: f32 = 1.6;
const LIFETIME: std::ops::Range<u32> = 60..240;

#[derive(Clone, Copy, Debug)]
struct Particle {
    position: Vec2,
    age: u32,
    lifetime: u32,
}

pub struct FlowField {
    rng: SketchRng,
    noise: Noise,
    particles: Vec<Particle>,
    hue: f32,
}

pub fn init() -> FlowField {
    let mut rng = gallery::runtime::rng::from_seed(0);
    FlowField {
        noise: Noise::new(&mut rng),
        rng,
        particles: Vec::with_capacity(PARTICLE_COUNT),
        hue: 0.0,
    }
}

impl FlowField {
    fn spawn(&mut self, ctx: &Context) -> Particle {
        Particle {
            position: random_point(&mut self.rng, ctx),
            age: 0,
            lifetime: self.rng.random_range(LIFETIME),
        }
    }

    fn heading(&self, p: Vec2, z: f32) -> f32 {
        self.noise
            .fbm3(p.x * NOISE_SCALE, p.y * NOISE_SCALE, z, 3, 0.5)
            * TWO_PI
            * 1.5
    }
}

impl Sketch for FlowField {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.noise = Noise::new(&mut self.rng);
        self.hue = self.rng.random();

        self.particles.clear();
        for _ in 0..PARTICLE_COUNT {
            let particle = self.spawn(ctx);
            self.particles.push(particle);
        }

        surface.background(PAPER);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let z = (ctx.frame_count() % 100_000) as f32 * TIME_SCALE;
        surface.stroke_weight(1.0);

        for i in 0..self.particles.len() {
            let particle = self.particles[i];
            let angle = self.heading(particle.position, z);
            let next = particle.position + Vec2::from_angle(angle) * SPEED;
            let t = particle.age as f32 / particle.lifetime as f32;

            surface.stroke(Color::hsla(self.hue + t * 0.15, 0.55, 0.35, 0.08));
            surface.line(particle.position, next);

            let out_of_bounds = next.x < 0.0
                || next.y < 0.0
                || next.x > ctx.width()
                || next.y > ctx.height();

            let expired = out_of_bounds || particle.age >= particle.lifetime;
            self.particles[i] = if expired {
                self.spawn(ctx)
            } else {
                Particle {
                    position: next,
                    age: particle.age + 1,
                    ..particle
                }
            };
        }
    }
}
