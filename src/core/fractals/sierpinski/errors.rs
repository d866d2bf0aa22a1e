use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SierpinskiError {
    ZeroPointCount,
}

impl fmt::Display for SierpinskiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPointCount => write!(f, "Point count must be greater than zero"),
        }
    }
}

impl Error for SierpinskiError {}
