use ahash::RandomState;
use std::collections::HashSet as StdHashSet;
use std::f32::consts::PI;

pub const TWO_PI: f32 = PI * 2.0;

pub type HashSet<K> = StdHashSet<K, RandomState>;

/// `ternary!(cond, true_case, false_case)`
#[macro_export]
macro_rules! ternary {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition { $_true } else { $_false }
    };
}

/// Keep values inside a range.
pub mod constrain {
    /// Clamp a value between min and max such that values that overshoot enter
    /// from the opposite bound  e.g. `constrain::wrap(1.2, 0.0, 1.0) // => 0.2`
    pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
        if min == max {
            return min;
        }

        let range = max - min;
        let value = value - min;

        let wrapped = value - (value / range).floor() * range;
        min + wrapped
    }
}

/// Linear interpolation between two values. Returns a value between `start` and
/// `end` based on the interpolation parameter `t` (typically 0.0 to 1.0).
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Re-map `value` from the `in` range onto the `out` range without clamping.
pub fn map_range(
    value: f32,
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
) -> f32 {
    if in_min == in_max {
        return out_min;
    }
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn wrap_enters_from_the_opposite_bound() {
        assert!(close(constrain::wrap(1.2, 0.0, 1.0), 0.2));
        assert!(close(constrain::wrap(-0.25, 0.0, 1.0), 0.75));
        assert!(close(constrain::wrap(610.0, 0.0, 600.0), 10.0));
    }

    #[test]
    fn map_range_is_linear_and_tolerates_empty_input() {
        assert!(close(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0));
        assert!(close(map_range(0.0, -1.0, 1.0, 0.0, 1.0), 0.5));
        assert!(close(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0));
    }

    #[test]
    fn lerp_interpolates() {
        assert!(close(lerp(10.0, 20.0, 0.25), 12.5));
    }
}
