use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to its sample coordinate. Samples are evenly spaced with the
/// first and last pixel on each axis landing exactly on the region edges, and
/// pixel row 0 sits on the smallest imaginary part.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let real = complex_rect.min().real
        + (relative_pixel_x / f64::from(pixel_rect.width() - 1)) * complex_rect.width();
    let imag = complex_rect.min().imag
        + (relative_pixel_y / f64::from(pixel_rect.height() - 1)) * complex_rect.height();

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_rects() -> (PixelRect, ComplexRect) {
        (
            PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: 100 }).unwrap(),
            ComplexRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap(),
        )
    }

    #[test]
    fn test_pixel_to_complex_corners() {
        let (pixel_rect, complex_rect) = unit_rects();

        let first = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, complex_rect);
        let last = pixel_to_complex_coords(Point { x: 100, y: 100 }, pixel_rect, complex_rect);

        assert_eq!(first, Ok(Complex::new(-1.0, -1.0)));
        assert_eq!(last, Ok(Complex::new(1.0, 1.0)));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let (pixel_rect, complex_rect) = unit_rects();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_pixel_to_complex_matches_even_spacing() {
        // four samples over [-2, 2]: -2, -2/3, 2/3, 2
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();
        let complex_rect =
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();

        let result = pixel_to_complex_coords(Point { x: 1, y: 2 }, pixel_rect, complex_rect)
            .unwrap();

        assert!((result.real - (-2.0 / 3.0)).abs() < 1e-12);
        assert!((result.imag - (2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let (pixel_rect, complex_rect) = unit_rects();
        let point = Point { x: 150, y: -10 };

        let result = pixel_to_complex_coords(point, pixel_rect, complex_rect);

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
