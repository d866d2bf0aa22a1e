use crate::core::actions::generate_escape_field::generate_escape_field::generate_escape_field;
use crate::core::actions::generate_escape_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::escape_time::IterationCountPolicy;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Each sample is the parameter `c`; iteration starts from `z0 = 0`.
#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: SampleGrid,
    max_iterations: u32,
    escape_radius: f64,
    count_policy: IterationCountPolicy,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.grid.sample(pixel)?;

        Ok(self
            .count_policy
            .count(Complex::ZERO, c, self.max_iterations, self.escape_radius))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.grid.pixel_rect()
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, params: &MandelbrotParams) -> Self {
        Self {
            grid: SampleGrid::new(pixel_rect, params.region()),
            max_iterations: params.max_iterations(),
            escape_radius: params.escape_radius(),
            count_policy: params.count_policy(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }
}

/// Computes the Mandelbrot escape field for `params` sampled over `pixel_rect`.
pub fn generate_mandelbrot_field(
    pixel_rect: PixelRect,
    params: &MandelbrotParams,
) -> Result<EscapeField, MandelbrotError> {
    Ok(generate_escape_field(&MandelbrotAlgorithm::new(
        pixel_rect, params,
    ))?)
}
