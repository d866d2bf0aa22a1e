use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::core::actions::generate_escape_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};

#[derive(Debug, PartialEq)]
pub enum GenerateEscapeFieldError<E> {
    /// The escape-time algorithm failed for a pixel.
    Algorithm(E),
    /// The collected counts did not form a valid field.
    Field(EscapeFieldError),
}

impl<E: fmt::Display> fmt::Display for GenerateEscapeFieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::Field(err) => write!(f, "escape field error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GenerateEscapeFieldError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Field(err) => Some(err),
        }
    }
}

/// Computes the whole escape field for an algorithm. The field is rebuilt from
/// scratch on every call.
pub fn generate_escape_field<Alg>(
    algorithm: &Alg,
) -> Result<EscapeField, GenerateEscapeFieldError<Alg::Failure>>
where
    Alg: EscapeTimeAlgorithm + Sync,
    Alg::Failure: Send,
{
    let pixel_rect = algorithm.pixel_rect();
    let start = Instant::now();

    let counts = generate_fractal_rayon(algorithm).map_err(GenerateEscapeFieldError::Algorithm)?;

    debug!(
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        max_iterations = algorithm.max_iterations(),
        elapsed = ?start.elapsed(),
        "escape field computed"
    );

    EscapeField::from_counts(pixel_rect, algorithm.max_iterations(), counts)
        .map_err(GenerateEscapeFieldError::Field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubAlgorithm {
        count: Result<u32, ()>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            self.count
                .map(|count| count + pixel.x as u32)
                .map_err(|_| StubError {})
        }

        fn pixel_rect(&self) -> PixelRect {
            PixelRect::from_size(3, 2).unwrap()
        }
    }

    impl EscapeTimeAlgorithm for StubAlgorithm {
        fn max_iterations(&self) -> u32 {
            5
        }
    }

    #[test]
    fn test_builds_field_from_counts() {
        let field = generate_escape_field(&StubAlgorithm { count: Ok(1) }).unwrap();

        assert_eq!(field.counts(), &[1, 2, 3, 1, 2, 3]);
        assert_eq!(field.max_iterations(), 5);
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let result = generate_escape_field(&StubAlgorithm { count: Err(()) });

        assert_eq!(result, Err(GenerateEscapeFieldError::Algorithm(StubError {})));
    }

    #[test]
    fn test_rejects_counts_above_budget() {
        let result = generate_escape_field(&StubAlgorithm { count: Ok(4) });

        assert!(matches!(
            result,
            Err(GenerateEscapeFieldError::Field(
                EscapeFieldError::CountExceedsMax { count: 6, .. }
            ))
        ));
    }

    #[test]
    fn test_error_display() {
        let err: GenerateEscapeFieldError<StubError> =
            GenerateEscapeFieldError::Algorithm(StubError {});

        assert_eq!(format!("{}", err), "algorithm error: StubError");
    }
}
