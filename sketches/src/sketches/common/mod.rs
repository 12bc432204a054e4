use gallery::prelude::*;

pub mod palette;

/// Uniform point inside the surface.
pub fn random_point(rng: &mut SketchRng, ctx: &Context) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..ctx.width()),
        rng.random_range(0.0..ctx.height()),
    )
}

/// Unit vector at a uniformly random angle.
pub fn random_direction(rng: &mut SketchRng) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..TWO_PI))
}

/// Intersection point of segments `p0-p1` and `q0-q1`, if they cross.
pub fn segment_intersection(
    (p0, p1): (Vec2, Vec2),
    (q0, q1): (Vec2, Vec2),
) -> Option<Vec2> {
    let sa = p1 - p0;
    let sb = q1 - q0;
    let u = sa.perp_dot(sb);

    if u.abs() <= f32::EPSILON {
        return None;
    }

    let ba = p0 - q0;
    let ta = sb.perp_dot(ba) / u;
    let tb = sa.perp_dot(ba) / u;

    if (0.0..=1.0).contains(&ta) && (0.0..=1.0).contains(&tb) {
        Some(p0 + sa * ta)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_intersect() {
        let hit = segment_intersection(
            (Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)),
            (Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0)),
        )
        .unwrap();
        assert!(hit.distance(Vec2::new(5.0, 5.0)) < 1e-4);
    }

    #[test]
    fn parallel_or_short_segments_do_not() {
        let a = (Vec2::ZERO, Vec2::new(10.0, 0.0));
        let above = (Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0));
        let short = (Vec2::new(5.0, 1.0), Vec2::new(5.0, 4.0));
        assert!(segment_intersection(a, above).is_none());
        assert!(segment_intersection(a, short).is_none());
    }
}
