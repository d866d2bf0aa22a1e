use crate::core::actions::generate_escape_field::generate_escape_field::generate_escape_field;
use crate::core::actions::generate_escape_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::escape_time::escape_count;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::params::JuliaParams;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    grid: SampleGrid,
    c: Complex,
    max_iterations: u32,
    escape_radius: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = self.grid.sample(pixel)?;

        Ok(escape_count(z0, self.c, self.max_iterations, self.escape_radius))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.grid.pixel_rect()
    }
}

impl EscapeTimeAlgorithm for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, params: &JuliaParams) -> Self {
        Self {
            grid: SampleGrid::new(pixel_rect, params.region()),
            c: params.c(),
            max_iterations: params.max_iterations(),
            escape_radius: params.escape_radius(),
        }
    }
}

pub fn generate_julia_field(
    pixel_rect: PixelRect,
    params: &JuliaParams,
) -> Result<EscapeField, JuliaError> {
    Ok(generate_escape_field(&JuliaAlgorithm::new(pixel_rect, params))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::julia::params::{
        DEFAULT_CONSTANT, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH,
    };

    #[test]
    fn test_compute_returns_error_for_pixel_outside_pixel_rect() {
        let pixel_rect = PixelRect::from_size(11, 11).unwrap();
        let params = JuliaParams::new(DEFAULT_CONSTANT, 10).unwrap();
        let algorithm = JuliaAlgorithm::new(pixel_rect, &params);
        let point = Point { x: 0, y: 11 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }

    #[test]
    fn test_corner_escapes_on_first_iteration() {
        let pixel_rect = PixelRect::from_size(5, 5).unwrap();
        let params = JuliaParams::new(DEFAULT_CONSTANT, 50).unwrap();
        let algorithm = JuliaAlgorithm::new(pixel_rect, &params);

        // z0 = -2 - 2i
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(1));
    }

    #[test]
    fn test_beautiful_constant_end_to_end() {
        let pixel_rect = PixelRect::from_size(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        let params = JuliaParams::new(DEFAULT_CONSTANT, DEFAULT_MAX_ITERATIONS).unwrap();
        let field = generate_julia_field(pixel_rect, &params).unwrap();

        assert_eq!(field.counts().len(), 800 * 800);
        assert!(field.counts().iter().all(|&count| (1..=50).contains(&count)));

        // 16x16 block around the origin stays bounded
        for y in 392..408 {
            for x in 392..408 {
                assert_eq!(field.get(Point { x, y }), Some(50), "pixel ({x}, {y})");
            }
        }

        // every sample on the edge of [-2, 2]^2 has |z0| >= 2
        for i in 0..800 {
            for point in [
                Point { x: i, y: 0 },
                Point { x: i, y: 799 },
                Point { x: 0, y: i },
                Point { x: 799, y: i },
            ] {
                assert_eq!(field.get(point), Some(1), "pixel {:?}", point);
            }
        }
    }
}
