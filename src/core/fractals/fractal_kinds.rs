#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    Dragon,
    SierpinskiChaosGame,
    SierpinskiIfs,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::Dragon,
        Self::SierpinskiChaosGame,
        Self::SierpinskiIfs,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Dragon => "Harter-Heighway dragon",
            Self::SierpinskiChaosGame => "Sierpinski (chaos game)",
            Self::SierpinskiIfs => "Sierpinski (IFS)",
        }
    }

    #[must_use]
    pub const fn is_escape_time(self) -> bool {
        matches!(self, Self::Mandelbrot | Self::Julia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_are_listed_once() {
        assert_eq!(FractalKinds::ALL.len(), 5);

        for (i, kind) in FractalKinds::ALL.iter().enumerate() {
            assert!(!FractalKinds::ALL[i + 1..].contains(kind));
        }
    }

    #[test]
    fn test_escape_time_kinds() {
        let escape_time: Vec<_> = FractalKinds::ALL
            .iter()
            .filter(|kind| kind.is_escape_time())
            .collect();

        assert_eq!(escape_time, [&FractalKinds::Mandelbrot, &FractalKinds::Julia]);
    }
}
