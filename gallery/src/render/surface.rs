use glam::Vec2;

use super::color::Color;

/// An owned RGBA8 copy of a surface's pixels, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// True when any pixel differs from `background`.
    pub fn has_pixel_other_than(&self, background: [u8; 4]) -> bool {
        self.data.chunks_exact(4).any(|px| px != background)
    }
}

/// The immediate-mode drawing target sketches render into.
///
/// Coordinates are in pixels with the origin at the top-left corner and y
/// pointing down. Shapes honor the current transform; `background`,
/// `set_pixel` and `get_pixel` address raw pixels.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Restore default style and the identity transform. The host calls this
    /// before every `reset` and `draw`.
    fn begin_frame(&mut self);

    fn background(&mut self, color: Color);

    fn fill(&mut self, color: Color);
    fn no_fill(&mut self);
    fn stroke(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn stroke_weight(&mut self, weight: f32);

    fn line(&mut self, a: Vec2, b: Vec2);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn ellipse(&mut self, center: Vec2, w: f32, h: f32);
    fn polygon(&mut self, points: &[Vec2]);
    fn polyline(&mut self, points: &[Vec2]);
    fn point(&mut self, p: Vec2);

    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
    fn get_pixel(&self, x: u32, y: u32) -> Option<Color>;

    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: Vec2);

    fn capture(&self) -> RasterImage;
}
