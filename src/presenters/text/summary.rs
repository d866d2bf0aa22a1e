use std::io::Write;

use crate::controllers::ports::summary_presenter::SummaryPresenterPort;
use crate::core::data::fractal_summary::FractalSummary;

/// Writes one line per summary.
pub struct TextSummaryPresenter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryPresenterPort for TextSummaryPresenter<W> {
    fn present(&mut self, summary: &FractalSummary) -> std::io::Result<()> {
        writeln!(self.writer, "{}", summary)?;
        self.writer.flush()
    }
}

impl<W: Write> TextSummaryPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextSummaryPresenter<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vec2::Vec2;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    #[test]
    fn test_present_writes_one_line_per_summary() {
        let mut presenter = TextSummaryPresenter::new(Vec::new());
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5)];

        presenter
            .present(&FractalSummary::from_points(FractalKinds::SierpinskiChaosGame, &points))
            .unwrap();
        presenter
            .present(&FractalSummary::from_curve(FractalKinds::Dragon, &points))
            .unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();

        assert_eq!(
            output,
            "Sierpinski (chaos game): 2 points, bounds [0.0000, 0.0000]..[1.0000, 0.5000]\n\
             Harter-Heighway dragon: 1 segment, bounds [0.0000, 0.0000]..[1.0000, 0.5000]\n"
        );
    }
}
