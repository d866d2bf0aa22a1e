use rand::Rng;

use crate::core::data::vec2::Vec2;
use crate::core::fractals::sierpinski::errors::SierpinskiError;

const QUARTER_SQRT_3: f64 = 0.433_012_701_892_219_3;

/// Uniform contraction `p -> p * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub scale: f64,
    pub offset: Vec2,
}

impl AffineMap {
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    #[must_use]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IteratedFunctionSystem {
    maps: [AffineMap; 3],
}

impl Default for IteratedFunctionSystem {
    fn default() -> Self {
        Self::sierpinski()
    }
}

impl IteratedFunctionSystem {
    #[must_use]
    pub const fn new(maps: [AffineMap; 3]) -> Self {
        Self { maps }
    }

    /// Half-scale copies placed at the bottom-left, bottom-right and top of
    /// the unit equilateral triangle.
    #[must_use]
    pub const fn sierpinski() -> Self {
        Self::new([
            AffineMap::new(0.5, Vec2::new(0.0, 0.0)),
            AffineMap::new(0.5, Vec2::new(0.5, 0.0)),
            AffineMap::new(0.5, Vec2::new(0.25, QUARTER_SQRT_3)),
        ])
    }

    #[must_use]
    pub fn maps(&self) -> &[AffineMap; 3] {
        &self.maps
    }

    /// Seeds uniformly from `[0, 1)²`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec2>, SierpinskiError> {
        if count == 0 {
            return Err(SierpinskiError::ZeroPointCount);
        }

        let seed = Vec2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));

        self.generate_from_seed(seed, count, rng)
    }

    /// Returns `count` points; the seed itself is not included, so the first
    /// point is already the image of `seed` under one map.
    pub fn generate_from_seed<R: Rng + ?Sized>(
        &self,
        seed: Vec2,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec2>, SierpinskiError> {
        if count == 0 {
            return Err(SierpinskiError::ZeroPointCount);
        }

        let mut points = Vec::with_capacity(count);
        let mut current = seed;

        for _ in 0..count {
            current = self.maps[rng.gen_range(0..self.maps.len())].apply(current);
            points.push(current);
        }

        Ok(points)
    }
}
