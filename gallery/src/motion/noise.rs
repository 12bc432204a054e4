use rand::seq::SliceRandom;

use crate::runtime::rng::SketchRng;

/// Seeded gradient (Perlin) noise. Output is roughly in `-1.0..=1.0`.
#[derive(Clone, Debug)]
pub struct Noise {
    perm: [u8; 512],
}

impl Noise {
    pub fn new(rng: &mut SketchRng) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(rng);

        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = table[i & 255];
        }

        Self { perm }
    }

    fn hash(&self, i: i32) -> usize {
        self.perm[(i & 255) as usize] as usize
    }

    pub fn get2(&self, x: f32, y: f32) -> f32 {
        self.get3(x, y, 0.0)
    }

    pub fn get3(&self, x: f32, y: f32, z: f32) -> f32 {
        let (xi, yi, zi) =
            (x.floor() as i32, y.floor() as i32, z.floor() as i32);
        let (xf, yf, zf) = (x - x.floor(), y - y.floor(), z - z.floor());
        let (u, v, w) = (fade(xf), fade(yf), fade(zf));

        let a = self.hash(xi) + (yi & 255) as usize;
        let aa = self.perm[a] as usize + (zi & 255) as usize;
        let ab = self.perm[a + 1] as usize + (zi & 255) as usize;
        let b = self.hash(xi + 1) + (yi & 255) as usize;
        let ba = self.perm[b] as usize + (zi & 255) as usize;
        let bb = self.perm[b + 1] as usize + (zi & 255) as usize;

        let p = &self.perm;
        let x1 = lerp(
            u,
            grad(p[aa], xf, yf, zf),
            grad(p[ba], xf - 1.0, yf, zf),
        );
        let x2 = lerp(
            u,
            grad(p[ab], xf, yf - 1.0, zf),
            grad(p[bb], xf - 1.0, yf - 1.0, zf),
        );
        let y1 = lerp(v, x1, x2);

        let x3 = lerp(
            u,
            grad(p[aa + 1], xf, yf, zf - 1.0),
            grad(p[ba + 1], xf - 1.0, yf, zf - 1.0),
        );
        let x4 = lerp(
            u,
            grad(p[ab + 1], xf, yf - 1.0, zf - 1.0),
            grad(p[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
        );
        let y2 = lerp(v, x3, x4);

        lerp(w, y1, y2)
    }

    /// Fractal sum of `octaves` layers, each at double frequency and
    /// `persistence` times the previous amplitude, normalized to `-1..=1`.
    pub fn fbm3(
        &self,
        x: f32,
        y: f32,
        z: f32,
        octaves: u32,
        persistence: f32,
    ) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max = 0.0;

        for _ in 0..octaves.max(1) {
            total += self.get3(x * frequency, y * frequency, z * frequency)
                * amplitude;
            max += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        total / max
    }
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

fn grad(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
