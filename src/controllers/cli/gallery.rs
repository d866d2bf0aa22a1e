use std::error::Error;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::controllers::ports::summary_presenter::SummaryPresenterPort;
use crate::core::data::fractal_summary::FractalSummary;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::dragon::curve::{DEFAULT_DRAGON_PASSES, dragon_curve};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::generate_julia_field;
use crate::core::fractals::julia::params::{
    DEFAULT_CONSTANT, DEFAULT_HEIGHT as JULIA_HEIGHT,
    DEFAULT_MAX_ITERATIONS as JULIA_MAX_ITERATIONS, DEFAULT_WIDTH as JULIA_WIDTH, JuliaParams,
};
use crate::core::fractals::mandelbrot::algorithm::generate_mandelbrot_field;
use crate::core::fractals::mandelbrot::view::{
    DEFAULT_HEIGHT as MANDELBROT_HEIGHT, DEFAULT_WIDTH as MANDELBROT_WIDTH, MandelbrotView,
};
use crate::core::fractals::sierpinski::DEFAULT_POINT_COUNT;
use crate::core::fractals::sierpinski::chaos_game::chaos_game;
use crate::core::fractals::sierpinski::ifs::IteratedFunctionSystem;
use crate::core::fractals::sierpinski::triangle::Triangle;

/// Generates every fractal at its default parameters and hands a summary of
/// each to the presenter.
pub struct CliGalleryController<P: SummaryPresenterPort> {
    presenter: P,
}

impl<P: SummaryPresenterPort> CliGalleryController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        kind: FractalKinds,
        rng: &mut R,
    ) -> Result<FractalSummary, Box<dyn Error>> {
        debug!(fractal = kind.display_name(), "generating");

        let summary = match kind {
            FractalKinds::Mandelbrot => {
                let pixel_rect = PixelRect::from_size(MANDELBROT_WIDTH, MANDELBROT_HEIGHT)?;
                let params = MandelbrotView::default().params()?;

                FractalSummary::from_field(kind, &generate_mandelbrot_field(pixel_rect, &params)?)
            }
            FractalKinds::Julia => {
                let pixel_rect = PixelRect::from_size(JULIA_WIDTH, JULIA_HEIGHT)?;
                let params = JuliaParams::new(DEFAULT_CONSTANT, JULIA_MAX_ITERATIONS)?;

                FractalSummary::from_field(kind, &generate_julia_field(pixel_rect, &params)?)
            }
            FractalKinds::Dragon => {
                FractalSummary::from_curve(kind, &dragon_curve(DEFAULT_DRAGON_PASSES)?)
            }
            FractalKinds::SierpinskiChaosGame => FractalSummary::from_points(
                kind,
                &chaos_game(&Triangle::UNIT, DEFAULT_POINT_COUNT, rng)?,
            ),
            FractalKinds::SierpinskiIfs => FractalSummary::from_points(
                kind,
                &IteratedFunctionSystem::sierpinski().generate(DEFAULT_POINT_COUNT, rng)?,
            ),
        };

        Ok(summary)
    }

    pub fn generate_all<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<FractalSummary>, Box<dyn Error>> {
        let mut summaries = Vec::with_capacity(FractalKinds::ALL.len());

        for &kind in FractalKinds::ALL {
            let start = Instant::now();
            let summary = self.generate(kind, rng)?;

            info!(
                fractal = kind.display_name(),
                elapsed = ?start.elapsed(),
                "generated"
            );

            self.presenter.present(&summary)?;
            summaries.push(summary);
        }

        Ok(summaries)
    }
}
