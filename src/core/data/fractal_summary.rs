use std::fmt;

use crate::core::data::escape_field::EscapeField;
use crate::core::data::vec2::{Bounds, Vec2};
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryDetail {
    Field {
        width: u32,
        height: u32,
        max_iterations: u32,
        bounded: usize,
    },
    Curve {
        segments: usize,
        bounds: Option<Bounds>,
    },
    Points {
        count: usize,
        bounds: Option<Bounds>,
    },
}

/// One-line description of a generated fractal.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalSummary {
    pub kind: FractalKinds,
    pub detail: SummaryDetail,
}

impl FractalSummary {
    #[must_use]
    pub fn from_field(kind: FractalKinds, field: &EscapeField) -> Self {
        Self {
            kind,
            detail: SummaryDetail::Field {
                width: field.width(),
                height: field.height(),
                max_iterations: field.max_iterations(),
                bounded: field.bounded_count(),
            },
        }
    }

    #[must_use]
    pub fn from_curve(kind: FractalKinds, points: &[Vec2]) -> Self {
        Self {
            kind,
            detail: SummaryDetail::Curve {
                segments: points.len().saturating_sub(1),
                bounds: Bounds::of(points),
            },
        }
    }

    #[must_use]
    pub fn from_points(kind: FractalKinds, points: &[Vec2]) -> Self {
        Self {
            kind,
            detail: SummaryDetail::Points {
                count: points.len(),
                bounds: Bounds::of(points),
            },
        }
    }
}

fn write_bounds(f: &mut fmt::Formatter<'_>, bounds: &Option<Bounds>) -> fmt::Result {
    match bounds {
        Some(Bounds { min, max }) => write!(
            f,
            ", bounds [{:.4}, {:.4}]..[{:.4}, {:.4}]",
            min.x, min.y, max.x, max.y
        ),
        None => Ok(()),
    }
}

fn write_count(f: &mut fmt::Formatter<'_>, count: usize, noun: &str) -> fmt::Result {
    match count {
        1 => write!(f, "1 {}", noun),
        _ => write!(f, "{} {}s", count, noun),
    }
}

impl fmt::Display for FractalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind.display_name())?;

        match &self.detail {
            SummaryDetail::Field {
                width,
                height,
                max_iterations,
                bounded,
            } => write!(
                f,
                "{}x{} samples, {} iterations, {} bounded",
                width, height, max_iterations, bounded
            ),
            SummaryDetail::Curve { segments, bounds } => {
                write_count(f, *segments, "segment")?;
                write_bounds(f, bounds)
            }
            SummaryDetail::Points { count, bounds } => {
                write_count(f, *count, "point")?;
                write_bounds(f, bounds)
            }
        }
    }
}
