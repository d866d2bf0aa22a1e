use crate::core::data::vec2::Vec2;
use crate::core::fractals::dragon::errors::DragonError;

/// Initial polyline: the unit segment along the x axis.
pub const DRAGON_START: [Vec2; 2] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];

pub const DEFAULT_DRAGON_PASSES: u32 = 12;

/// 2^20 + 1 points is the largest curve we generate.
pub const MAX_DRAGON_PASSES: u32 = 20;

/// One refinement pass. Segment `i` of the input gets a corner inserted at
/// `p_i + v/2 + rot(v)/2`, where `rot` is a quarter turn counter-clockwise for
/// even `i` and clockwise for odd `i`. Parity restarts at zero every pass.
#[must_use]
pub fn refine(points: &[Vec2]) -> Vec<Vec2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut refined = Vec::with_capacity(points.len().saturating_mul(2).saturating_sub(1));
    refined.push(first);

    for (i, segment) in points.windows(2).enumerate() {
        let (p1, p2) = (segment[0], segment[1]);
        let v = p2 - p1;
        let turned = if i % 2 == 0 {
            v.rotate_ccw()
        } else {
            v.rotate_cw()
        };

        refined.push(p1 + v * 0.5 + turned * 0.5);
        refined.push(p2);
    }

    refined
}

pub fn refine_passes(points: &[Vec2], passes: u32) -> Result<Vec<Vec2>, DragonError> {
    if passes > MAX_DRAGON_PASSES {
        return Err(DragonError::TooManyPasses {
            passes,
            max: MAX_DRAGON_PASSES,
        });
    }

    let mut current = points.to_vec();

    for _ in 0..passes {
        current = refine(&current);
    }

    Ok(current)
}

/// The Harter-Heighway dragon after `passes` refinements of [`DRAGON_START`].
/// Always has `2^passes + 1` points.
pub fn dragon_curve(passes: u32) -> Result<Vec<Vec2>, DragonError> {
    refine_passes(&DRAGON_START, passes)
}
