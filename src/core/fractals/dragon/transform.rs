use crate::core::data::vec2::Vec2;
use crate::core::fractals::dragon::errors::DragonError;

/// Similarity transform applied as scale, then counter-clockwise rotation,
/// then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragonTransform {
    scale: f64,
    rotation_degrees: f64,
    translation: Vec2,
}

impl Default for DragonTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DragonTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_degrees: 0.0,
        translation: Vec2::ZERO,
    };

    pub fn new(scale: f64, rotation_degrees: f64, translation: Vec2) -> Result<Self, DragonError> {
        let mut transform = Self::IDENTITY;

        transform.set_scale(scale)?;
        transform.set_rotation_degrees(rotation_degrees)?;
        transform.translation = translation;

        Ok(transform)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), DragonError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(DragonError::InvalidScale { scale });
        }

        self.scale = scale;
        Ok(())
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) -> Result<(), DragonError> {
        if !degrees.is_finite() {
            return Err(DragonError::InvalidRotation { degrees });
        }

        self.rotation_degrees = degrees;
        Ok(())
    }

    pub fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        (point * self.scale).rotate(self.rotation_degrees.to_radians()) + self.translation
    }

    #[must_use]
    pub fn apply_all(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&point| self.apply(point)).collect()
    }
}
