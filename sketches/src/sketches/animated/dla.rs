use gallery::prelude::*;

use crate::sketches::common::palette::INK;
use crate::sketches::common::random_direction;

// Diffusion-limited aggregation grown from a single seed particle.

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "Dla",
    display_name: "Diffusion-Limited Aggregation",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 600,
    h: 600,
};

const CELL: f32 = 3.0;
const MAX_NODES: usize = 3000;
const WALKERS_PER_FRAME: usize = 6;
const STEPS_PER_WALKER: usize = 300;
const SPAWN_MARGIN: f32 = 8.0;
const KILL_MARGIN: f32 = 30.0;

const NEIGHBORS: [[i32; 2]; 8] = [
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

#[derive(Clone, Copy, Debug)]
struct Node {
    cell: [i32; 2],
    parent: Option<usize>,
    depth: u32,
}

pub struct Dla {
    rng: SketchRng,
    cols: i32,
    rows: i32,
    /// Node index occupying each grid cell.
    grid: Vec<Option<usize>>,
    nodes: Vec<Node>,
    radius: f32,
    hue: f32,
}

pub fn init() -> Dla {
    Dla {
        rng: gallery::runtime::rng::from_seed(0),
        cols: 0,
        rows: 0,
        grid: vec![],
        nodes: vec![],
        radius: 0.0,
        hue: 0.0,
    }
}

impl Dla {
    fn center(&self) -> [i32; 2] {
        [self.cols / 2, self.rows / 2]
    }

    fn slot(&self, [x, y]: [i32; 2]) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.cols || y >= self.rows {
            return None;
        }
        Some((y * self.cols + x) as usize)
    }

    fn occupant(&self, cell: [i32; 2]) -> Option<usize> {
        self.slot(cell).and_then(|i| self.grid[i])
    }

    fn distance_from_center(&self, [x, y]: [i32; 2]) -> f32 {
        let [cx, cy] = self.center();
        Vec2::new((x - cx) as f32, (y - cy) as f32).length()
    }

    fn max_radius(&self) -> f32 {
        (self.cols.min(self.rows) / 2 - 2) as f32
    }

    fn attach(
        &mut self,
        cell: [i32; 2],
        parent: Option<usize>,
    ) -> Option<usize> {
        let slot = self.slot(cell)?;
        let id = self.nodes.len();
        let depth = parent.map_or(0, |p| self.nodes[p].depth + 1);

        self.nodes.push(Node {
            cell,
            parent,
            depth,
        });
        self.grid[slot] = Some(id);
        self.radius = self.radius.max(self.distance_from_center(cell));

        Some(id)
    }

    /// Release one walker near the cluster edge and let it wander until it
    /// sticks, strays too far, or runs out of steps.
    fn release(&mut self) -> Option<usize> {
        let spawn_radius = (self.radius + SPAWN_MARGIN).min(self.max_radius());
        let kill_radius = spawn_radius + KILL_MARGIN;
        let [cx, cy] = self.center();
        let start = random_direction(&mut self.rng) * spawn_radius;
        let mut cell =
            [cx + start.x.round() as i32, cy + start.y.round() as i32];

        for _ in 0..STEPS_PER_WALKER {
            if self.occupant(cell).is_none() {
                let parent = NEIGHBORS.iter().find_map(|[dx, dy]| {
                    self.occupant([cell[0] + dx, cell[1] + dy])
                });
                if let Some(parent) = parent {
                    return self.attach(cell, Some(parent));
                }
            }

            let [dx, dy] = NEIGHBORS[self.rng.random_range(0..NEIGHBORS.len())];
            cell = [cell[0] + dx, cell[1] + dy];

            if self.slot(cell).is_none()
                || self.distance_from_center(cell) > kill_radius
            {
                return None;
            }
        }

        None
    }

    fn to_screen(&self, [x, y]: [i32; 2]) -> Vec2 {
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5) * CELL
    }

    pub fn is_complete(&self) -> bool {
        self.nodes.len() >= MAX_NODES || self.radius >= self.max_radius()
    }
}

impl Sketch for Dla {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.hue = self.rng.random();
        self.cols = (ctx.width() / CELL) as i32;
        self.rows = (ctx.height() / CELL) as i32;
        self.grid.clear();
        self.grid.resize((self.cols * self.rows).max(0) as usize, None);
        self.nodes.clear();
        self.radius = 0.0;

        let center = self.center();
        self.attach(center, None);

        surface.background(INK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, _ctx: &Context) {
        surface.stroke_weight(CELL * 0.6);

        for _ in 0..WALKERS_PER_FRAME {
            if self.is_complete() {
                return;
            }

            let Some(id) = self.release() else {
                continue;
            };
            let node = self.nodes[id];
            let Some(parent) = node.parent else {
                continue;
            };

            let t = (node.depth as f32 / 120.0).min(1.0);
            surface.stroke(Color::hsl(
                self.hue + t * 0.4,
                0.6,
                lerp(0.75, 0.45, t),
            ));
            surface.line(
                self.to_screen(self.nodes[parent].cell),
                self.to_screen(node.cell),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_touches_its_parent() {
        let mut sketch = init();
        let mut canvas = Canvas::new(SKETCH_CONFIG.w, SKETCH_CONFIG.h);
        let ctx = Context::new([SKETCH_CONFIG.w, SKETCH_CONFIG.h], 9);
        sketch.reset(&mut canvas, &ctx);

        for _ in 0..400 {
            sketch.draw(&mut canvas, &ctx);
        }

        assert!(sketch.nodes.len() > 1);
        assert!(sketch.nodes[0].parent.is_none());
        for node in &sketch.nodes[1..] {
            let parent = sketch.nodes[node.parent.unwrap()];
            let dx = (node.cell[0] - parent.cell[0]).abs();
            let dy = (node.cell[1] - parent.cell[1]).abs();
            assert!(dx <= 1 && dy <= 1);
            assert_eq!(node.depth, parent.depth + 1);
        }
    }
}
