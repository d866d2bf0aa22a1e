use std::time::{Duration, Instant};

use tracing::debug;

use crate::controllers::ports::control_sync::{ControlSyncPort, ViewChange};
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::algorithm::generate_mandelbrot_field;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::view::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MandelbrotView, UpdateState,
};

/// Owns the Mandelbrot view and re-renders the escape field once per accepted
/// change.
pub struct MandelbrotExplorer<S: ControlSyncPort> {
    view: MandelbrotView,
    pixel_rect: PixelRect,
    control_sync: S,
    field: Option<EscapeField>,
    render_count: u64,
    render_duration: Duration,
}

impl<S: ControlSyncPort> MandelbrotExplorer<S> {
    pub fn new(control_sync: S) -> Result<Self, MandelbrotError> {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT, control_sync)
    }

    pub fn with_size(width: u32, height: u32, control_sync: S) -> Result<Self, MandelbrotError> {
        Ok(Self {
            view: MandelbrotView::default(),
            pixel_rect: PixelRect::from_size(width, height)?,
            control_sync,
            field: None,
            render_count: 0,
            render_duration: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn view(&self) -> &MandelbrotView {
        &self.view
    }

    #[must_use]
    pub fn field(&self) -> Option<&EscapeField> {
        self.field.as_ref()
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    #[must_use]
    pub fn render_duration(&self) -> Duration {
        self.render_duration
    }

    #[must_use]
    pub fn control_sync(&self) -> &S {
        &self.control_sync
    }

    /// Initial render.
    pub fn open(&mut self) -> Result<bool, MandelbrotError> {
        self.redraw(false)
    }

    /// Applies `change` and re-renders. Returns `Ok(false)` when the change
    /// arrived during a render and was dropped.
    pub fn handle(&mut self, change: ViewChange) -> Result<bool, MandelbrotError> {
        let applied = match change {
            ViewChange::CenterX(real) => self.view.set_center_x(real)?,
            ViewChange::CenterY(imag) => self.view.set_center_y(imag)?,
            ViewChange::Zoom(zoom) => self.view.set_zoom(zoom)?,
            ViewChange::MaxIterations(max_iterations) => {
                self.view.set_max_iterations(max_iterations)?
            }
            ViewChange::Preset(preset) => {
                if self.view.state() == UpdateState::Updating {
                    return Ok(false);
                }

                self.view.apply_preset(preset);
                return self.redraw(true);
            }
        };

        if !applied {
            return Ok(false);
        }

        self.redraw(false)
    }

    fn redraw(&mut self, sync_controls: bool) -> Result<bool, MandelbrotError> {
        if !self.view.begin_update() {
            return Ok(false);
        }

        let result = self.render(sync_controls);

        self.view.end_update();

        result.map(|()| true)
    }

    fn render(&mut self, sync_controls: bool) -> Result<(), MandelbrotError> {
        let params = self.view.params()?;
        let start = Instant::now();
        let field = generate_mandelbrot_field(self.pixel_rect, &params)?;

        self.render_duration = start.elapsed();
        self.render_count += 1;

        debug!(
            center_real = self.view.center().real,
            center_imag = self.view.center().imag,
            zoom = self.view.zoom(),
            max_iterations = params.max_iterations(),
            elapsed = ?self.render_duration,
            "mandelbrot field rendered"
        );

        self.field = Some(field);

        if sync_controls {
            let snapshot = self.view.snapshot();

            for echoed in self.control_sync.sync(&snapshot) {
                self.handle(echoed)?;
            }
        }

        Ok(())
    }
}
