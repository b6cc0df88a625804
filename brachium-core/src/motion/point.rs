//! Cartesian point in arm space

use core::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartesian position in millimetres
///
/// `e` is an auxiliary channel that is interpolated along with the
/// position but ignored by the kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub e: f32,
}

impl Point {
    /// Origin with a zero auxiliary channel
    pub const ZERO: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        e: 0.0,
    };

    /// Create a point with a zero auxiliary channel
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, e: 0.0 }
    }

    /// Same point with the auxiliary channel replaced
    pub const fn with_e(self, e: f32) -> Self {
        Self { e, ..self }
    }

    /// `self + other * scale`
    pub fn add_scaled(self, other: Point, scale: f32) -> Self {
        self + other * scale
    }

    /// Euclidean distance over x, y and z
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        libm::sqrtf(dx * dx + dy * dy + dz * dz)
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.e.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            e: self.e + rhs.e,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            e: self.e - rhs.e,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            e: self.e * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_e() {
        let a = Point::new(0.0, 0.0, 0.0).with_e(100.0);
        let b = Point::new(3.0, 4.0, 12.0);
        assert!((a.distance_to(&b) - 13.0).abs() < 1e-5);
    }

    #[test]
    fn test_vector_ops() {
        let a = Point::new(1.0, 2.0, 3.0).with_e(4.0);
        let b = Point::new(10.0, 20.0, 30.0).with_e(40.0);

        assert_eq!(b - a, Point::new(9.0, 18.0, 27.0).with_e(36.0));
        assert_eq!(a.add_scaled(b - a, 0.0), a);
        assert_eq!(a.add_scaled(b - a, 1.0), b);
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0).with_e(8.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::ZERO.is_finite());
        assert!(!Point::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Point::ZERO.with_e(f32::INFINITY).is_finite());
    }
}
