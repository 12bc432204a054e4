use gallery::prelude::*;

use crate::sketches::common::{palette, random_point};

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Voronoi",
    display_name: "Voronoi",
    play_mode: PlayMode::Once,
    fps: 30.0,
    w: 500,
    h: 500,
};

const SITE_COUNT: usize = 28;

struct Site {
    position: Vec2,
    color: Color,
}

pub struct Voronoi {
    sites: Vec<Site>,
}

pub fn init() -> Voronoi {
    Voronoi { sites: vec![] }
}

impl Voronoi {
    /// Index of the closest site, with the gap to the runner-up.
    fn nearest(&self, p: Vec2) -> Option<(usize, f32)> {
        let mut best = None;
        let mut best_d = f32::MAX;
        let mut second_d = f32::MAX;

        for (i, site) in self.sites.iter().enumerate() {
            let d = site.position.distance(p);
            if d < best_d {
                second_d = best_d;
                best_d = d;
                best = Some(i);
            } else if d < second_d {
                second_d = d;
            }
        }

        best.map(|i| (i, second_d - best_d))
    }
}

impl Sketch for Voronoi {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let mut rng = ctx.rng();
        self.sites = (0..SITE_COUNT)
            .map(|_| Site {
                position: random_point(&mut rng, ctx),
                color: palette::random_hue(&mut rng),
            })
            .collect();
        surface.background(WHITE);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let [w, h] = ctx.resolution_u32();

        for y in 0..h {
            for x in 0..w {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let Some((i, gap)) = self.nearest(p) else {
                    continue;
                };
                let color = ternary!(gap < 1.5, BLACK, self.sites[i].color);
                surface.set_pixel(x, y, color);
            }
        }

        surface.no_stroke();
        surface.fill(BLACK);
        for site in &self.sites {
            surface.ellipse(site.position, 5.0, 5.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_closest_site() {
        let mut sketch = init();
        sketch.sites = vec![
            Site {
                position: Vec2::new(10.0, 10.0),
                color: WHITE,
            },
            Site {
                position: Vec2::new(90.0, 10.0),
                color: BLACK,
            },
        ];

        let (i, gap) = sketch.nearest(Vec2::new(80.0, 12.0)).unwrap();
        assert_eq!(i, 1);
        assert!(gap > 50.0);
        assert!(init().nearest(Vec2::ZERO).is_none());
    }
}
