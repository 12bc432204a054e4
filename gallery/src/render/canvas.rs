use glam::{Affine2, Vec2};
use log::warn;

use super::color::{BLACK, Color, WHITE};
use super::surface::{RasterImage, Surface};

const MIN_ELLIPSE_SEGMENTS: usize = 16;
const MAX_ELLIPSE_SEGMENTS: usize = 180;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Style {
    fill: Option<Color>,
    stroke: Option<Color>,
    weight: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(WHITE),
            stroke: Some(BLACK),
            weight: 1.0,
        }
    }
}

/// CPU raster implementation of [`Surface`]: a straight-alpha RGBA8 buffer
/// with source-over blending.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
    style: Style,
    transform: Affine2,
    stack: Vec<(Affine2, Style)>,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
            style: Style::default(),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64
        {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + x as usize) * 4)
    }

    fn blend_at(&mut self, x: i64, y: i64, color: Color) {
        let Some(i) = self.index(x, y) else {
            return;
        };

        if color.a >= 1.0 {
            self.data[i..i + 4].copy_from_slice(&color.to_rgba8());
            return;
        }
        if color.a <= 0.0 {
            return;
        }

        let dst = Color::from_rgba8([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]);
        let sa = color.a;
        let da = dst.a * (1.0 - sa);
        let out_a = sa + da;
        let mix = |s: f32, d: f32| (s * sa + d * da) / out_a;
        let out = Color::rgba(
            mix(color.r, dst.r),
            mix(color.g, dst.g),
            mix(color.b, dst.b),
            out_a,
        );
        self.data[i..i + 4].copy_from_slice(&out.to_rgba8());
    }

    /// Uniform scale of the current transform, used to scale stroke weights.
    fn transform_scale(&self) -> f32 {
        self.transform.matrix2.determinant().abs().sqrt()
    }

    fn to_device(&self, points: &[Vec2]) -> Vec<Vec2> {
        points
            .iter()
            .map(|p| self.transform.transform_point2(*p))
            .collect()
    }

    /// Even-odd scanline fill sampled at pixel centers. `points` are in
    /// device space.
    fn fill_device_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 || color.a <= 0.0 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }

        let y_start = (min_y.floor() as i64).max(0);
        let y_end = (max_y.ceil() as i64).min(self.height as i64);
        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

        for y in y_start..y_end {
            let yc = y as f32 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                    let t = (yc - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let x_start = ((span[0] - 0.5).ceil() as i64).max(0);
                let x_end =
                    ((span[1] - 0.5).ceil() as i64).min(self.width as i64);
                for x in x_start..x_end {
                    self.blend_at(x, y, color);
                }
            }
        }
    }

    fn fill_device_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.5 {
            self.blend_at(
                center.x.floor() as i64,
                center.y.floor() as i64,
                color,
            );
            return;
        }

        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;
        let r2 = radius * radius;

        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend_at(x, y, color);
                }
            }
        }
    }

    fn stroke_device_segment(
        &mut self,
        a: Vec2,
        b: Vec2,
        weight: f32,
        color: Color,
    ) {
        if !(a.is_finite() && b.is_finite()) {
            return;
        }

        if weight <= 1.5 {
            let bounds = Vec2::new(self.width as f32, self.height as f32);
            let Some((a, b)) = clip_segment(a, b, bounds) else {
                return;
            };
            let delta = b - a;
            let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
            let steps = steps as u32;
            for i in 0..=steps {
                let p = a + delta * (i as f32 / steps as f32);
                self.blend_at(p.x.floor() as i64, p.y.floor() as i64, color);
            }
            return;
        }

        let delta = b - a;
        let length = delta.length();
        if length <= f32::EPSILON {
            self.fill_device_disc(a, weight / 2.0, color);
            return;
        }

        let normal = Vec2::new(-delta.y, delta.x) / length * (weight / 2.0);
        self.fill_device_polygon(
            &[a + normal, b + normal, b - normal, a - normal],
            color,
        );
    }

    fn stroke_device_path(&mut self, points: &[Vec2], closed: bool) {
        let Some(color) = self.style.stroke else {
            return;
        };
        let weight = self.style.weight * self.transform_scale();

        for pair in points.windows(2) {
            self.stroke_device_segment(pair[0], pair[1], weight, color);
        }
        if closed && points.len() > 2 {
            self.stroke_device_segment(
                points[points.len() - 1],
                points[0],
                weight,
                color,
            );
        }
    }

    fn shape(&mut self, local_points: &[Vec2]) {
        let points = self.to_device(local_points);
        if let Some(fill) = self.style.fill {
            self.fill_device_polygon(&points, fill);
        }
        self.stroke_device_path(&points, true);
    }
}

/// Liang-Barsky clip of `a-b` against `[0, bounds.x] x [0, bounds.y]`.
/// `None` when no part of the segment is inside.
fn clip_segment(a: Vec2, b: Vec2, bounds: Vec2) -> Option<(Vec2, Vec2)> {
    let delta = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (p, q) in [
        (-delta.x, a.x),
        (delta.x, bounds.x - a.x),
        (-delta.y, a.y),
        (delta.y, bounds.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((a + delta * t0, a + delta * t1))
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_frame(&mut self) {
        self.style = Style::default();
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    fn background(&mut self, color: Color) {
        if color.a >= 1.0 {
            let rgba = color.to_rgba8();
            for px in self.data.chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
            return;
        }

        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                self.blend_at(x, y, color);
            }
        }
    }

    fn fill(&mut self, color: Color) {
        self.style.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.style.fill = None;
    }

    fn stroke(&mut self, color: Color) {
        self.style.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.style.weight = weight.max(0.0);
    }

    fn line(&mut self, a: Vec2, b: Vec2) {
        let points = self.to_device(&[a, b]);
        self.stroke_device_path(&points, false);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.shape(&[
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]);
    }

    fn ellipse(&mut self, center: Vec2, w: f32, h: f32) {
        let radius = Vec2::new(w / 2.0, h / 2.0);
        let device_radius = radius.max_element() * self.transform_scale();
        let segments = ((device_radius * 1.5) as usize)
            .clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);

        let points: Vec<Vec2> = (0..segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * std::f32::consts::TAU;
                center + Vec2::new(a.cos(), a.sin()) * radius
            })
            .collect();

        self.shape(&points);
    }

    fn polygon(&mut self, points: &[Vec2]) {
        self.shape(points);
    }

    fn polyline(&mut self, points: &[Vec2]) {
        let points = self.to_device(points);
        self.stroke_device_path(&points, false);
    }

    fn point(&mut self, p: Vec2) {
        let Some(color) = self.style.stroke else {
            return;
        };
        let p = self.transform.transform_point2(p);
        let weight = self.style.weight * self.transform_scale();
        self.fill_device_disc(p, weight / 2.0, color);
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x as i64, y as i64) {
            self.data[i..i + 4].copy_from_slice(&color.to_rgba8());
        }
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.index(x as i64, y as i64)?;
        Some(Color::from_rgba8([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    fn push(&mut self) {
        self.stack.push((self.transform, self.style));
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some((transform, style)) => {
                self.transform = transform;
                self.style = style;
            }
            None => warn!("pop() without matching push(); ignoring"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }

    fn capture(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}
