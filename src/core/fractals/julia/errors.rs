use std::{error::Error, fmt};

use crate::core::actions::generate_escape_field::generate_escape_field::GenerateEscapeFieldError;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::escape_field::EscapeFieldError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, PartialEq)]
pub enum JuliaError {
    ZeroMaxIterationsError,
    InvalidEscapeRadius { radius: f64 },
    InvalidConstant { c: Complex },
    Region(ComplexRectError),
    PixelRect(PixelRectError),
    Sample(PixelToComplexCoordsError),
    Field(EscapeFieldError),
}

impl fmt::Display for JuliaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { radius } => {
                write!(f, "escape radius must be positive and finite: {}", radius)
            }
            Self::InvalidConstant { c } => {
                write!(f, "julia constant must be finite: {}{:+}i", c.real, c.imag)
            }
            Self::Region(err) => write!(f, "region error: {}", err),
            Self::PixelRect(err) => write!(f, "pixel rect error: {}", err),
            Self::Sample(err) => write!(f, "sample error: {}", err),
            Self::Field(err) => write!(f, "escape field error: {}", err),
        }
    }
}

impl Error for JuliaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::PixelRect(err) => Some(err),
            Self::Sample(err) => Some(err),
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for JuliaError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<PixelRectError> for JuliaError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<GenerateEscapeFieldError<PixelToComplexCoordsError>> for JuliaError {
    fn from(err: GenerateEscapeFieldError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateEscapeFieldError::Algorithm(err) => Self::Sample(err),
            GenerateEscapeFieldError::Field(err) => Self::Field(err),
        }
    }
}
