use crate::core::{
    data::{complex::Complex, complex_rect::ComplexRect},
    fractals::{
        escape_time::{DEFAULT_ESCAPE_RADIUS, is_valid_escape_radius},
        julia::errors::JuliaError,
    },
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_CONSTANT: Complex = Complex::new(-0.5251993, 0.5251993);

/// The sample region is `[-HALF_EXTENT, HALF_EXTENT]` on both axes.
pub const HALF_EXTENT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JuliaPreset {
    Beautiful,
    Dendrite,
    Rabbit,
}

impl JuliaPreset {
    pub const ALL: &'static [Self] = &[Self::Beautiful, Self::Dendrite, Self::Rabbit];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beautiful => "Beautiful",
            Self::Dendrite => "Dendrite",
            Self::Rabbit => "Rabbit",
        }
    }

    #[must_use]
    pub const fn constant(self) -> Complex {
        match self {
            Self::Beautiful => DEFAULT_CONSTANT,
            Self::Dendrite => Complex::new(0.0, 1.0),
            Self::Rabbit => Complex::new(-0.123, 0.745),
        }
    }
}

fn check_constant(c: Complex) -> Result<Complex, JuliaError> {
    if !c.is_finite() {
        return Err(JuliaError::InvalidConstant { c });
    }

    Ok(c)
}

/// Each sample is the starting point `z0`; `c` is fixed across the field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    c: Complex,
    region: ComplexRect,
    max_iterations: u32,
    escape_radius: f64,
}

impl JuliaParams {
    pub fn new(c: Complex, max_iterations: u32) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        Ok(Self {
            c: check_constant(c)?,
            region: ComplexRect::centered(Complex::ZERO, HALF_EXTENT)?,
            max_iterations,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        })
    }

    pub fn from_preset(preset: JuliaPreset) -> Result<Self, JuliaError> {
        Self::new(preset.constant(), DEFAULT_MAX_ITERATIONS)
    }

    #[must_use]
    pub fn with_region(mut self, region: ComplexRect) -> Self {
        self.region = region;
        self
    }

    pub fn with_escape_radius(mut self, escape_radius: f64) -> Result<Self, JuliaError> {
        self.set_escape_radius(escape_radius)?;
        Ok(self)
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
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

    pub fn set_c(&mut self, c: Complex) -> Result<(), JuliaError> {
        self.c = check_constant(c)?;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) -> Result<(), JuliaError> {
        if !is_valid_escape_radius(escape_radius) {
            return Err(JuliaError::InvalidEscapeRadius {
                radius: escape_radius,
            });
        }

        self.escape_radius = escape_radius;
        Ok(())
    }
}
