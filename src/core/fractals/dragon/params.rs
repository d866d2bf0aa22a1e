use crate::core::data::vec2::Vec2;
use crate::core::fractals::dragon::curve::{DEFAULT_DRAGON_PASSES, MAX_DRAGON_PASSES, dragon_curve};
use crate::core::fractals::dragon::errors::DragonError;
use crate::core::fractals::dragon::transform::DragonTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragonMode {
    #[default]
    Plain,
    Transformed,
}

impl DragonMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Plain => Self::Transformed,
            Self::Transformed => Self::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragonPreset {
    Basic,
    HighDetail,
    Double,
}

impl DragonPreset {
    pub const ALL: &'static [Self] = &[Self::Basic, Self::HighDetail, Self::Double];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::HighDetail => "High detail",
            Self::Double => "Double",
        }
    }

    #[must_use]
    pub const fn passes(self) -> u32 {
        match self {
            Self::Basic => 8,
            Self::HighDetail => 15,
            Self::Double => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragonParams {
    passes: u32,
    transform: DragonTransform,
    mode: DragonMode,
}

impl Default for DragonParams {
    fn default() -> Self {
        Self {
            passes: DEFAULT_DRAGON_PASSES,
            transform: DragonTransform::IDENTITY,
            mode: DragonMode::Plain,
        }
    }
}

impl DragonParams {
    pub fn new(passes: u32) -> Result<Self, DragonError> {
        let mut params = Self::default();
        params.set_passes(passes)?;
        Ok(params)
    }

    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    #[must_use]
    pub fn transform(&self) -> DragonTransform {
        self.transform
    }

    #[must_use]
    pub fn mode(&self) -> DragonMode {
        self.mode
    }

    pub fn set_passes(&mut self, passes: u32) -> Result<(), DragonError> {
        if passes > MAX_DRAGON_PASSES {
            return Err(DragonError::TooManyPasses {
                passes,
                max: MAX_DRAGON_PASSES,
            });
        }

        self.passes = passes;
        Ok(())
    }

    pub fn transform_mut(&mut self) -> &mut DragonTransform {
        &mut self.transform
    }

    pub fn set_mode(&mut self, mode: DragonMode) {
        self.mode = mode;
    }

    /// Presets always return to plain mode. Basic also resets scale and rotation.
    pub fn apply_preset(&mut self, preset: DragonPreset) {
        self.passes = preset.passes();
        self.mode = DragonMode::Plain;

        if preset == DragonPreset::Basic {
            self.transform = DragonTransform::IDENTITY;
        }
    }

    /// Curve points, transformed when in [`DragonMode::Transformed`].
    pub fn points(&self) -> Result<Vec<Vec2>, DragonError> {
        let curve = dragon_curve(self.passes)?;

        Ok(match self.mode {
            DragonMode::Plain => curve,
            DragonMode::Transformed => self.transform.apply_all(&curve),
        })
    }
}

/// Number of line segments in a polyline.
#[must_use]
pub fn segment_count(points: &[Vec2]) -> usize {
    points.len().saturating_sub(1)
}
