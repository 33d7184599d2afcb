use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A direction or displacement: centerline tangents, circle plane normals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Longitudinal axis; the normal of every vertical cross-section.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Same direction with unit length. `None` when the length vanishes or
    /// is not finite.
    pub fn normalized(&self) -> Option<Self> {
        match self.length() {
            len if !len.is_finite() || len < 1e-15 => None,
            len => Some(*self / len),
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + rhs * -1.0
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self::new(k * self.x, k * self.y, k * self.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalized().unwrap();
        assert_eq!(v, Vec3::new(0.6, 0.8, 0.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vanishing_or_non_finite_vector_has_no_direction() {
        assert!(Vec3::new(0.0, 0.0, 0.0).normalized().is_none());
        assert!(Vec3::new(1e-17, 0.0, 0.0).normalized().is_none());
        assert!(Vec3::new(f64::NAN, 0.0, 1.0).normalized().is_none());
        assert!(Vec3::new(f64::INFINITY, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(a + b, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(Vec3::Z.length(), 1.0);
    }
}
