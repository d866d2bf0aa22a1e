use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// A per-pixel algorithm producing iteration counts bounded by a budget.
pub trait EscapeTimeAlgorithm: FractalAlgorithm<Success = u32> {
    fn max_iterations(&self) -> u32;
}
