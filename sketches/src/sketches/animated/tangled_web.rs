use gallery::prelude::*;

use crate::sketches::common::palette::{INK, PAPER};
use crate::sketches::common::segment_intersection;

// After https://inconvergent.net/2019/a-tangle-of-webs/

pub const SKETCH_CONFIG: SketchConfig = SketchConfig {
    name: "TangledWeb",
    display_name: "Tangled Web",
    play_mode: PlayMode::Loop,
    fps: 30.0,
    w: 600,
    h: 600,
};

const RIM_DIVISIONS: usize = 12;
const MAX_ITERATIONS: usize = 160;
const REST_LENGTH: f32 = 20.0;

#[derive(Clone, Debug)]
struct Vertex {
    position: Vec2,
    neighbors: Vec<usize>,
}

impl Vertex {
    fn new(position: Vec2) -> Self {
        Self {
            position,
            neighbors: vec![],
        }
    }
}

pub struct TangledWeb {
    rng: SketchRng,
    vertices: Vec<Vertex>,
    edges: Vec<(usize, usize)>,
    iterations: usize,
}

pub fn init() -> TangledWeb {
    TangledWeb {
        rng: gallery::runtime::rng::from_seed(0),
        vertices: vec![],
        edges: vec![],
        iterations: 0,
    }
}

impl TangledWeb {
    fn connect(&mut self, a: usize, b: usize) {
        if !self.vertices[a].neighbors.contains(&b) {
            self.vertices[a].neighbors.push(b);
        }
        if !self.vertices[b].neighbors.contains(&a) {
            self.vertices[b].neighbors.push(a);
        }
        self.edges.push((a, b));
    }

    fn disconnect(&mut self, a: usize, b: usize) {
        self.vertices[a].neighbors.retain(|n| *n != b);
        self.vertices[b].neighbors.retain(|n| *n != a);
        self.edges
            .retain(|edge| *edge != (a, b) && *edge != (b, a));
    }

    fn build_rim(&mut self, ctx: &Context) {
        self.vertices.clear();
        self.edges.clear();

        let radius = ctx.width().min(ctx.height()) * 0.45;
        for i in 0..RIM_DIVISIONS {
            let angle = i as f32 * TWO_PI / RIM_DIVISIONS as f32;
            self.vertices
                .push(Vertex::new(
                    ctx.center() + Vec2::from_angle(angle) * radius,
                ));
        }
        for i in 0..RIM_DIVISIONS {
            self.connect(i, (i + 1) % RIM_DIVISIONS);
        }
    }

    /// Cast a random ray from inside the web and bridge the first two strands
    /// it crosses. Returns false when the ray missed.
    fn weave(&mut self, ctx: &Context) -> bool {
        let radius = ctx.width().min(ctx.height()) * 0.45;
        let start = ctx.center()
            + Vec2::from_angle(self.rng.random_range(0.0..TWO_PI))
                * self.rng.random_range(radius / 2.0..radius);
        let reach = ctx.resolution().length();
        let end = start
            + Vec2::from_angle(self.rng.random_range(0.0..TWO_PI)) * reach;

        let mut hits: Vec<(Vec2, (usize, usize))> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| {
                let at = segment_intersection(
                    (start, end),
                    (self.vertices[a].position, self.vertices[b].position),
                )?;
                Some((at, (a, b)))
            })
            .collect();

        if hits.len() < 2 {
            return false;
        }

        hits.sort_by(|(p, _), (q, _)| {
            p.distance_squared(start).total_cmp(&q.distance_squared(start))
        });

        let mut bridge = [0; 2];
        for (slot, (at, (a, b))) in hits.into_iter().take(2).enumerate() {
            let id = self.vertices.len();
            self.vertices.push(Vertex::new(at));
            self.disconnect(a, b);
            self.connect(a, id);
            self.connect(id, b);
            bridge[slot] = id;
        }
        self.connect(bridge[0], bridge[1]);

        true
    }

    /// Pull every vertex one unit toward each neighbor further than the rest
    /// length.
    fn relax(&mut self) {
        let positions: Vec<Vec2> =
            self.vertices.iter().map(|v| v.position).collect();

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            for n in &vertex.neighbors {
                let delta = positions[*n] - positions[i];
                let length = delta.length();
                if length >= REST_LENGTH {
                    vertex.position += delta / length;
                }
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.background(PAPER);
        surface.stroke(INK.with_alpha(0.85));
        surface.stroke_weight(1.0);

        for &(a, b) in &self.edges {
            surface.line(self.vertices[a].position, self.vertices[b].position);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.iterations >= MAX_ITERATIONS
    }
}

impl Sketch for TangledWeb {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.iterations = 0;
        self.build_rim(ctx);
        self.render(surface);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        if self.is_complete() {
            return;
        }

        self.iterations += 1;
        if self.weave(ctx) {
            self.relax();
            self.render(surface);
        }
    }
}
