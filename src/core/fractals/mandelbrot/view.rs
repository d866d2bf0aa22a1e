use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::escape_time::DEFAULT_ESCAPE_RADIUS;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Half the visible extent on each axis at zoom 1.
pub const BASE_HALF_EXTENT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateState {
    #[default]
    Idle,
    Updating,
}

/// Named viewpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotPreset {
    Spirals,
    Seahorse,
    Top,
    Details,
    Reset,
}

impl MandelbrotPreset {
    pub const ALL: &'static [Self] = &[
        Self::Spirals,
        Self::Seahorse,
        Self::Top,
        Self::Details,
        Self::Reset,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spirals => "Spirals",
            Self::Seahorse => "Seahorse",
            Self::Top => "Top",
            Self::Details => "Details",
            Self::Reset => "Reset",
        }
    }

    /// (center, zoom, max iterations)
    #[must_use]
    pub const fn settings(self) -> (Complex, f64, u32) {
        match self {
            Self::Spirals => (Complex::new(-0.7, 0.15), 20.0, 200),
            Self::Seahorse => (Complex::new(-0.745, 0.115), 200.0, 300),
            Self::Top => (Complex::new(0.0, 0.7), 10.0, 150),
            Self::Details => (Complex::new(-0.75, 0.05), 100.0, 500),
            Self::Reset => (DEFAULT_CENTER, DEFAULT_ZOOM, DEFAULT_MAX_ITERATIONS),
        }
    }
}

/// Values the controls display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotViewSnapshot {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
}

/// Mutable Mandelbrot viewpoint. Setters are ignored while a render is in
/// progress so that programmatic control updates made during the render do not
/// start another one.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotView {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
    state: UpdateState,
}

impl Default for MandelbrotView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            state: UpdateState::Idle,
        }
    }
}

impl MandelbrotView {
    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn state(&self) -> UpdateState {
        self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> MandelbrotViewSnapshot {
        MandelbrotViewSnapshot {
            center: self.center,
            zoom: self.zoom,
            max_iterations: self.max_iterations,
        }
    }

    /// Visible region: `center ± 1.5 / zoom` on both axes.
    pub fn limits(&self) -> Result<ComplexRect, MandelbrotError> {
        Ok(ComplexRect::centered(
            self.center,
            BASE_HALF_EXTENT / self.zoom,
        )?)
    }

    pub fn params(&self) -> Result<MandelbrotParams, MandelbrotError> {
        MandelbrotParams::new(self.limits()?, self.max_iterations)?
            .with_escape_radius(DEFAULT_ESCAPE_RADIUS)
    }

    // Setters return Ok(false) when suppressed by an in-progress render.

    pub fn set_center_x(&mut self, real: f64) -> Result<bool, MandelbrotError> {
        if self.state == UpdateState::Updating {
            return Ok(false);
        }

        if !real.is_finite() {
            return Err(MandelbrotError::InvalidCenter { coordinate: real });
        }

        self.center.real = real;
        Ok(true)
    }

    pub fn set_center_y(&mut self, imag: f64) -> Result<bool, MandelbrotError> {
        if self.state == UpdateState::Updating {
            return Ok(false);
        }

        if !imag.is_finite() {
            return Err(MandelbrotError::InvalidCenter { coordinate: imag });
        }

        self.center.imag = imag;
        Ok(true)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<bool, MandelbrotError> {
        if self.state == UpdateState::Updating {
            return Ok(false);
        }

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(MandelbrotError::InvalidZoom { zoom });
        }

        self.zoom = zoom;
        Ok(true)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<bool, MandelbrotError> {
        if self.state == UpdateState::Updating {
            return Ok(false);
        }

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        Ok(true)
    }

    /// Replaces every value at once. Presets bypass the update guard because
    /// they are applied before the render starts.
    pub fn apply_preset(&mut self, preset: MandelbrotPreset) {
        let (center, zoom, max_iterations) = preset.settings();

        self.center = center;
        self.zoom = zoom;
        self.max_iterations = max_iterations;
    }

    /// Idle -> Updating. Returns false if a render is already in progress.
    pub fn begin_update(&mut self) -> bool {
        match self.state {
            UpdateState::Idle => {
                self.state = UpdateState::Updating;
                true
            }
            UpdateState::Updating => false,
        }
    }

    pub fn end_update(&mut self) {
        self.state = UpdateState::Idle;
    }
}
