use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Pixel dimensions paired with the complex region they sample. Immutable per
/// render; a new grid is built whenever the view changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    pixel_rect: PixelRect,
    region: ComplexRect,
}

impl SampleGrid {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, region: ComplexRect) -> Self {
        Self { pixel_rect, region }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    pub fn sample(&self, pixel: Point) -> Result<Complex, PixelToComplexCoordsError> {
        pixel_to_complex_coords(pixel, self.pixel_rect, self.region)
    }
}
