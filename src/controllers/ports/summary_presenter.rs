use crate::core::data::fractal_summary::FractalSummary;

pub trait SummaryPresenterPort {
    fn present(&mut self, summary: &FractalSummary) -> std::io::Result<()>;
}
