use crate::core::{
    data::complex_rect::ComplexRect,
    fractals::{
        escape_time::{DEFAULT_ESCAPE_RADIUS, IterationCountPolicy, is_valid_escape_radius},
        mandelbrot::errors::MandelbrotError,
    },
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: ComplexRect,
    max_iterations: u32,
    escape_radius: f64,
    count_policy: IterationCountPolicy,
}

impl MandelbrotParams {
    pub fn new(region: ComplexRect, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            region,
            max_iterations,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            count_policy: IterationCountPolicy::default(),
        })
    }

    pub fn with_escape_radius(mut self, escape_radius: f64) -> Result<Self, MandelbrotError> {
        self.set_escape_radius(escape_radius)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_count_policy(mut self, count_policy: IterationCountPolicy) -> Self {
        self.count_policy = count_policy;
        self
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn count_policy(&self) -> IterationCountPolicy {
        self.count_policy
    }

    pub fn set_region(&mut self, region: ComplexRect) {
        self.region = region
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) -> Result<(), MandelbrotError> {
        if !is_valid_escape_radius(escape_radius) {
            return Err(MandelbrotError::InvalidEscapeRadius {
                radius: escape_radius,
            });
        }

        self.escape_radius = escape_radius;
        Ok(())
    }
}
