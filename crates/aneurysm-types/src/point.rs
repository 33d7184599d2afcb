use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::vector::Vec3;

/// Position of a section origin or centerline sample. The vessel runs along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Self = Self::on_axis(0.0);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the longitudinal axis.
    pub const fn on_axis(z: f64) -> Self {
        Self { x: 0.0, y: 0.0, z }
    }

    /// Same height, moved to the lateral position `(x, y)`.
    pub fn at_lateral(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }
}

impl Add<Vec3> for Point3d {
    type Output = Point3d;
    fn add(self, rhs: Vec3) -> Self::Output {
        Point3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3d {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lateral_move_keeps_height() {
        let p = Point3d::on_axis(50.0).at_lateral(4.0, -1.0);
        assert_eq!(p, Point3d::new(4.0, -1.0, 50.0));
    }

    #[test]
    fn difference_is_a_vector() {
        let a = Point3d::new(3.0, 4.0, 5.0);
        let b = Point3d::new(1.0, 1.0, 1.0);
        assert_eq!(a - b, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn axial_distance() {
        assert_eq!(Point3d::ORIGIN.distance_to(&Point3d::on_axis(-7.5)), 7.5);
        assert_eq!(Point3d::new(3.0, 4.0, 0.0).distance_to(&Point3d::ORIGIN), 5.0);
    }
}
