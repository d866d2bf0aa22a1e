mod controllers;
mod core;
mod presenters;

pub use controllers::cli::gallery::CliGalleryController;
pub use controllers::explorer::dragon::{DragonChange, DragonExplorer};
pub use controllers::explorer::julia::{JuliaChange, JuliaExplorer};
pub use controllers::explorer::mandelbrot::MandelbrotExplorer;
pub use controllers::ports::control_sync::{ControlSyncPort, NoControlSync, ViewChange};
pub use controllers::ports::summary_presenter::SummaryPresenterPort;
pub use presenters::text::summary::TextSummaryPresenter;

pub use crate::core::actions::generate_escape_field::generate_escape_field::{
    GenerateEscapeFieldError, generate_escape_field,
};
pub use crate::core::actions::generate_escape_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
pub use crate::core::data::fractal_summary::{FractalSummary, SummaryDetail};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::data::vec2::{Bounds, Vec2};
pub use crate::core::fractals::dragon::curve::{
    DEFAULT_DRAGON_PASSES, DRAGON_START, MAX_DRAGON_PASSES, dragon_curve, refine, refine_passes,
};
pub use crate::core::fractals::dragon::errors::DragonError;
pub use crate::core::fractals::dragon::params::{DragonMode, DragonParams, DragonPreset, segment_count};
pub use crate::core::fractals::dragon::transform::DragonTransform;
pub use crate::core::fractals::escape_time::{
    DEFAULT_ESCAPE_RADIUS, IterationCountPolicy, escape_count, is_valid_escape_radius,
};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::{JuliaAlgorithm, generate_julia_field};
pub use crate::core::fractals::julia::errors::JuliaError;
pub use crate::core::fractals::julia::params::{JuliaParams, JuliaPreset};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, generate_mandelbrot_field};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::core::fractals::mandelbrot::view::{
    MandelbrotPreset, MandelbrotView, MandelbrotViewSnapshot, UpdateState,
};
pub use crate::core::fractals::sierpinski::DEFAULT_POINT_COUNT;
pub use crate::core::fractals::sierpinski::chaos_game::{chaos_game, chaos_game_from_seed};
pub use crate::core::fractals::sierpinski::errors::SierpinskiError;
pub use crate::core::fractals::sierpinski::ifs::{AffineMap, IteratedFunctionSystem};
pub use crate::core::fractals::sierpinski::triangle::Triangle;
pub use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};
