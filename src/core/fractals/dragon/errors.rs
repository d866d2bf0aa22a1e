use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragonError {
    TooManyPasses { passes: u32, max: u32 },
    InvalidScale { scale: f64 },
    InvalidRotation { degrees: f64 },
}

impl fmt::Display for DragonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPasses { passes, max } => {
                write!(f, "refinement passes must be at most {}: {}", max, passes)
            }
            Self::InvalidScale { scale } => {
                write!(f, "scale must be positive and finite: {}", scale)
            }
            Self::InvalidRotation { degrees } => {
                write!(f, "rotation must be finite: {}", degrees)
            }
        }
    }
}

impl Error for DragonError {}
