use gallery::prelude::*;

pub const INK: Color = Color::rgb(0.08, 0.08, 0.1);
pub const PAPER: Color = Color::rgb(0.96, 0.94, 0.9);

// Light green, red, dark blue
pub const TRIAD: [Color; 3] = [
    Color::rgb(0.09, 0.725, 0.47),
    Color::rgb(0.965, 0.447, 0.502),
    Color::rgb(0.114, 0.153, 0.525),
];

pub const MONDRIAN: [Color; 3] = [
    Color::rgb(0.86, 0.12, 0.1),
    Color::rgb(0.1, 0.25, 0.6),
    Color::rgb(0.98, 0.82, 0.1),
];

pub fn pick(rng: &mut SketchRng, colors: &[Color]) -> Color {
    colors[rng.random_range(0..colors.len())]
}

/// A random color with bounded saturation and lightness so neighbours stay
/// readable.
pub fn random_hue(rng: &mut SketchRng) -> Color {
    Color::hsl(
        rng.random(),
        rng.random_range(0.45..0.8),
        rng.random_range(0.35..0.65),
    )
}
