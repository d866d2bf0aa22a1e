use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane. `min` holds the smallest real and
/// imaginary parts, `max` the largest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // negated so NaN extents are rejected too
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Square region `center ± half_extent` on both axes.
    pub fn centered(center: Complex, half_extent: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(center.real - half_extent, center.imag - half_extent),
            Complex::new(center.real + half_extent, center.imag + half_extent),
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.min.real + self.max.real) / 2.0,
            (self.min.imag + self.max.imag) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let min = Complex::new(-2.0, -1.0);
        let max = Complex::new(1.0, 1.0);
        let rect = ComplexRect::new(min, max).unwrap();

        assert_eq!(rect.min(), min);
        assert_eq!(rect.max(), max);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let negative_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, -10.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_extent() {
        let rect = ComplexRect::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));

        assert!(rect.is_err());
    }

    #[test]
    fn test_centered_rect() {
        let rect = ComplexRect::centered(Complex::new(-0.5, 0.0), 1.5).unwrap();

        assert_eq!(rect.min(), Complex::new(-2.0, -1.5));
        assert_eq!(rect.max(), Complex::new(1.0, 1.5));
        assert_eq!(rect.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_centered_rect_rejects_zero_extent() {
        assert!(ComplexRect::centered(Complex::ZERO, 0.0).is_err());
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::new(Complex::new(-10.0, -5.0), Complex::new(100.0, 200.0)).unwrap();

        assert!(rect.contains_point(Complex::new(50.0, 50.0)));
        assert!(rect.contains_point(Complex::new(-10.0, 0.0)));
        assert!(rect.contains_point(Complex::new(100.0, 200.0)));
        assert!(!rect.contains_point(Complex::new(101.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(50.0, -6.0)));
    }
}
