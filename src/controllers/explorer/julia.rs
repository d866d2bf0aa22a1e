use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::data::complex::Complex;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::julia::algorithm::generate_julia_field;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::params::{
    DEFAULT_CONSTANT, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, JuliaParams,
    JuliaPreset,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JuliaChange {
    Real(f64),
    Imag(f64),
    MaxIterations(u32),
    Preset(JuliaPreset),
}

pub struct JuliaExplorer {
    params: JuliaParams,
    pixel_rect: PixelRect,
    field: Option<EscapeField>,
    render_duration: Duration,
}

impl JuliaExplorer {
    pub fn new() -> Result<Self, JuliaError> {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Result<Self, JuliaError> {
        Ok(Self {
            params: JuliaParams::new(DEFAULT_CONSTANT, DEFAULT_MAX_ITERATIONS)?,
            pixel_rect: PixelRect::from_size(width, height)?,
            field: None,
            render_duration: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn params(&self) -> &JuliaParams {
        &self.params
    }

    #[must_use]
    pub fn field(&self) -> Option<&EscapeField> {
        self.field.as_ref()
    }

    #[must_use]
    pub fn render_duration(&self) -> Duration {
        self.render_duration
    }

    pub fn handle(&mut self, change: JuliaChange) -> Result<&EscapeField, JuliaError> {
        match change {
            JuliaChange::Real(real) => {
                let imag = self.params.c().imag;
                self.params.set_c(Complex::new(real, imag))?;
            }
            JuliaChange::Imag(imag) => {
                let real = self.params.c().real;
                self.params.set_c(Complex::new(real, imag))?;
            }
            JuliaChange::MaxIterations(max_iterations) => {
                self.params.set_max_iterations(max_iterations)?;
            }
            JuliaChange::Preset(preset) => self.params.set_c(preset.constant())?,
        }

        self.render()
    }

    pub fn render(&mut self) -> Result<&EscapeField, JuliaError> {
        let start = Instant::now();
        let field = generate_julia_field(self.pixel_rect, &self.params)?;

        self.render_duration = start.elapsed();

        debug!(
            c_real = self.params.c().real,
            c_imag = self.params.c().imag,
            max_iterations = self.params.max_iterations(),
            elapsed = ?self.render_duration,
            "julia field rendered"
        );

        Ok(self.field.insert(field))
    }
}
