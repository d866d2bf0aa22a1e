use tracing::debug;

use crate::core::data::vec2::Vec2;
use crate::core::fractals::dragon::errors::DragonError;
use crate::core::fractals::dragon::params::{DragonParams, DragonPreset, segment_count};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragonChange {
    Passes(u32),
    Scale(f64),
    RotationDegrees(f64),
    ToggleMode,
    Preset(DragonPreset),
}

#[derive(Debug, Default)]
pub struct DragonExplorer {
    params: DragonParams,
    points: Vec<Vec2>,
}

impl DragonExplorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn params(&self) -> &DragonParams {
        &self.params
    }

    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        segment_count(&self.points)
    }

    pub fn handle(&mut self, change: DragonChange) -> Result<&[Vec2], DragonError> {
        match change {
            DragonChange::Passes(passes) => self.params.set_passes(passes)?,
            DragonChange::Scale(scale) => self.params.transform_mut().set_scale(scale)?,
            DragonChange::RotationDegrees(degrees) => {
                self.params.transform_mut().set_rotation_degrees(degrees)?
            }
            DragonChange::ToggleMode => {
                let mode = self.params.mode().toggled();
                self.params.set_mode(mode);
            }
            DragonChange::Preset(preset) => self.params.apply_preset(preset),
        }

        self.render()
    }

    pub fn render(&mut self) -> Result<&[Vec2], DragonError> {
        self.points = self.params.points()?;

        debug!(
            passes = self.params.passes(),
            mode = ?self.params.mode(),
            segments = self.segment_count(),
            "dragon curve rendered"
        );

        Ok(&self.points)
    }
}
