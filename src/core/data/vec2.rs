use std::ops::{Add, Mul, Sub};

/// Point or displacement in the real plane, used by the curve and point-cloud
/// generators.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Quarter turn counter-clockwise: (x, y) -> (-y, x).
    #[must_use]
    pub fn rotate_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Quarter turn clockwise: (x, y) -> (y, -x).
    #[must_use]
    pub fn rotate_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[must_use]
    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let d = self - other;
        d.x.hypot(d.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned bounds of a point set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[must_use]
    pub fn point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// `None` for an empty slice.
    #[must_use]
    pub fn of(points: &[Vec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        Some(
            rest.iter()
                .fold(Self::point(first), |bounds, &p| bounds.including(p)),
        )
    }

    #[must_use]
    pub fn including(self, p: Vec2) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Containment with `tolerance` slack on every side.
    #[must_use]
    pub fn contains(&self, p: Vec2, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turns() {
        let v = Vec2::new(1.0, 0.0);

        assert_eq!(v.rotate_ccw(), Vec2::new(-0.0, 1.0));
        assert_eq!(v.rotate_cw(), Vec2::new(0.0, -1.0));
        assert_eq!(v.rotate_ccw().rotate_cw(), v);
    }

    #[test]
    fn test_rotate_by_angle() {
        let rotated = Vec2::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);

        assert!(rotated.distance(Vec2::new(0.0, 1.0)) < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);

        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(b * 0.5, Vec2::new(1.5, -2.0));
        assert_eq!(a.midpoint(b), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_bounds() {
        let points = [
            Vec2::new(0.5, 1.0),
            Vec2::new(-1.0, 3.0),
            Vec2::new(2.0, -2.0),
        ];

        let bounds = Bounds::of(&points).unwrap();

        assert_eq!(bounds.min, Vec2::new(-1.0, -2.0));
        assert_eq!(bounds.max, Vec2::new(2.0, 3.0));
        assert_eq!(Bounds::of(&[]), None);
        assert!(bounds.contains(Vec2::new(2.0, 3.0), 0.0));
        assert!(!bounds.contains(Vec2::new(2.1, 0.0), 0.0));
        assert!(bounds.contains(Vec2::new(2.1, 0.0), 0.2));
    }
}
