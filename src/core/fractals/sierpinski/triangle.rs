use rand::Rng;

use crate::core::data::vec2::{Bounds, Vec2};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Vec2; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Triangle {
    /// Equilateral triangle with unit base on the x axis.
    pub const UNIT: Self = Self {
        vertices: [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, HALF_SQRT_3),
        ],
    };

    #[must_use]
    pub const fn new(vertices: [Vec2; 3]) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let [a, b, c] = self.vertices;

        Bounds::point(a).including(b).including(c)
    }

    /// Barycentric weights of `p`. All three are non-negative inside the
    /// triangle and sum to one. Non-finite for a degenerate triangle.
    #[must_use]
    pub fn barycentric(&self, p: Vec2) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        let denominator = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        let wa = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denominator;
        let wb = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denominator;

        [wa, wb, 1.0 - wa - wb]
    }

    #[must_use]
    pub fn contains(&self, p: Vec2, tolerance: f64) -> bool {
        self.barycentric(p)
            .iter()
            .all(|&weight| weight >= -tolerance)
    }

    /// Uniform sample from the axis-aligned bounding box. May fall outside the
    /// triangle itself.
    pub fn sample_bounding_box<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let Bounds { min, max } = self.bounds();

        Vec2::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_unit_triangle_bounds() {
        let bounds = Triangle::UNIT.bounds();

        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(1.0, HALF_SQRT_3));
        assert!((HALF_SQRT_3 - 3f64.sqrt() / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_contains() {
        let triangle = Triangle::UNIT;

        assert!(triangle.contains(Vec2::new(0.5, 0.3), 0.0));
        assert!(triangle.contains(Vec2::new(0.0, 0.0), 1e-12));
        assert!(triangle.contains(Vec2::new(0.5, HALF_SQRT_3), 1e-12));
        assert!(!triangle.contains(Vec2::new(0.1, 0.8), 1e-5));
        assert!(!triangle.contains(Vec2::new(0.5, -0.01), 1e-5));
    }

    #[test]
    fn test_barycentric_weights_of_vertices() {
        let triangle = Triangle::UNIT;

        for (i, &vertex) in triangle.vertices().iter().enumerate() {
            let weights = triangle.barycentric(vertex);

            for (j, &weight) in weights.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((weight - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_bounding_box_samples() {
        let triangle = Triangle::UNIT;
        let bounds = triangle.bounds();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            assert!(bounds.contains(triangle.sample_bounding_box(&mut rng), 0.0));
        }
    }
}
