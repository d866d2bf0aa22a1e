use std::ops::ControlFlow;

use crate::core::data::complex::Complex;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Iterates `z_k = z_{k-1}² + c` for `k = 1..=max_iterations` starting from
/// `z0` and returns the first `k` whose magnitude exceeds `escape_radius`, or
/// `max_iterations` if none does. The result is always in
/// `1..=max_iterations` for a non-zero budget; `z0` itself is never tested.
///
/// A NaN magnitude (from overflow) counts as escaped.
#[must_use]
pub fn escape_count(z0: Complex, c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let radius_squared = escape_radius * escape_radius;

    first_escape(z0, c, max_iterations, |z| {
        has_escaped(z.magnitude_squared(), radius_squared)
    })
}

fn first_escape(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    escaped: impl Fn(Complex) -> bool,
) -> u32 {
    let outcome = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;

        if escaped(next) {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn has_escaped(magnitude: f64, bound: f64) -> bool {
    !(magnitude <= bound)
}

#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn is_outside(magnitude: f64, radius: f64) -> bool {
    !(magnitude < radius)
}

/// Escape radii must be positive and finite.
#[must_use]
pub fn is_valid_escape_radius(escape_radius: f64) -> bool {
    escape_radius.is_finite() && escape_radius > 0.0
}

/// How escape counts are computed and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationCountPolicy {
    /// The escape index of [`escape_count`].
    #[default]
    Exact,
    /// The last index `i` in `0..max_iterations` with `|z_i| < escape_radius`,
    /// with `max_iterations - 1` then reported as `max_iterations`. Samples
    /// with `|c| >= escape_radius` count 0; samples escaping at step
    /// `max_iterations` are indistinguishable from bounded ones. This is the
    /// count the legacy Mandelbrot viewer draws.
    Legacy,
}

impl IterationCountPolicy {
    #[must_use]
    pub fn count(self, z0: Complex, c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
        match self {
            Self::Exact => escape_count(z0, c, max_iterations, escape_radius),
            Self::Legacy => {
                // index 0 is taken as inside; z0 = 0 for the Mandelbrot set
                let escaped_at = first_escape(z0, c, max_iterations, |z| {
                    is_outside(z.magnitude(), escape_radius)
                });
                let last_inside = escaped_at.saturating_sub(1);

                if last_inside.saturating_add(1) == max_iterations {
                    max_iterations
                } else {
                    last_inside
                }
            }
        }
    }
}
