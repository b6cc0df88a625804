//! Two-link planar inverse kinematics
//!
//! The planar chain lives in the x/y plane with the shoulder at the origin.
//! Joint zero is the straight-up pose (both links along +y); positive
//! angles swing the arm towards -x. The upper joint is driven through the
//! lower joint's gear train, so its motor angle carries a share of the
//! lower joint angle. Vertical travel `z` comes from the rotation axis
//! through the lead screw.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::ArmGeometry;
use crate::motion::Point;

/// Planar radius below which the target is treated as the shoulder itself
pub const SINGULARITY_RADIUS_MM: f32 = 1e-6;

const MIN_SIDE_MM: f32 = 1e-6;

/// Elbow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Elbow {
    #[default]
    Down,
    Up,
}

/// Joint angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointAngles {
    /// Rotation (lead-screw) axis
    pub rotation: f32,
    /// Lower link (shoulder)
    pub lower: f32,
    /// Upper link (elbow), including the coupling share of `lower`
    pub upper: f32,
}

/// Result of one inverse kinematics call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Solution {
    pub angles: JointAngles,
    /// Elbow configuration used
    pub elbow: Elbow,
    /// Target was out of reach and was pulled in to full extension
    pub overflow: bool,
}

/// Angle between sides `a` and `b` of a triangle, opposite side `c`
///
/// Returns 0 when either adjacent side is degenerate. The cosine is clamped
/// so rounding just outside the valid range cannot produce NaN.
pub fn cosine_angle(a: f32, b: f32, c: f32) -> f32 {
    if a.abs() < MIN_SIDE_MM || b.abs() < MIN_SIDE_MM {
        return 0.0;
    }
    let cos = (a * a + b * b - c * c) / (2.0 * a * b);
    libm::acosf(cos.clamp(-1.0, 1.0))
}

/// Inverse kinematics solver
///
/// Each instance remembers the elbow configuration it last used, so
/// targets on the centre line keep whichever side the arm is already on.
#[derive(Debug, Clone)]
pub struct IkSolver {
    geometry: ArmGeometry,
    elbow: Elbow,
}

impl IkSolver {
    /// Create a solver starting elbow-down
    pub fn new(geometry: ArmGeometry) -> Self {
        Self {
            geometry,
            elbow: Elbow::Down,
        }
    }

    pub fn geometry(&self) -> &ArmGeometry {
        &self.geometry
    }

    /// Elbow configuration used by the last solve
    pub fn elbow(&self) -> Elbow {
        self.elbow
    }

    pub fn set_elbow(&mut self, elbow: Elbow) {
        self.elbow = elbow;
    }

    /// Solve for the joint angles that place the wrist at `(x, y, z)`
    ///
    /// Out-of-reach targets are clamped to just inside full extension along
    /// the same bearing and flagged with `overflow`.
    pub fn solve(&mut self, x: f32, y: f32, z: f32) -> Solution {
        let g = self.geometry;
        let (l1, l2) = (g.lower_link_mm, g.upper_link_mm);

        let raw = libm::hypotf(x, y);
        let within_reach = raw <= g.reach();
        let overflow = !within_reach;

        if x > g.parked_x_mm || (within_reach && x > 0.0) {
            self.elbow = Elbow::Down;
        } else if within_reach && x < 0.0 {
            self.elbow = Elbow::Up;
        }

        let rotation = TAU * z / g.lead_mm;
        let dist = if overflow { g.clamped_reach() } else { raw };

        if dist <= SINGULARITY_RADIUS_MM {
            return Solution {
                angles: JointAngles {
                    rotation,
                    lower: 0.0,
                    upper: 0.0,
                },
                elbow: self.elbow,
                overflow,
            };
        }

        let px = match self.elbow {
            Elbow::Down => x,
            Elbow::Up => -x,
        };

        let bearing = libm::atan2f(y, px);
        let mut lower = bearing + cosine_angle(dist, l1, l2) - FRAC_PI_2;
        let mut upper = cosine_angle(l1, l2, dist) - PI;

        if self.elbow == Elbow::Up {
            lower = -lower;
            upper = -upper;
        }
        upper += g.upper_coupling * lower;

        Solution {
            angles: JointAngles {
                rotation,
                lower,
                upper,
            },
            elbow: self.elbow,
            overflow,
        }
    }

    /// Wrist position for the given joint angles
    ///
    /// `e` of the result is zero.
    pub fn forward(&self, angles: &JointAngles) -> Point {
        let g = &self.geometry;
        let a = angles.lower;
        let ab = a + angles.upper - g.upper_coupling * a;

        let x = -(g.lower_link_mm * libm::sinf(a) + g.upper_link_mm * libm::sinf(ab));
        let y = g.lower_link_mm * libm::cosf(a) + g.upper_link_mm * libm::cosf(ab);
        let z = angles.rotation * g.lead_mm / TAU;

        Point::new(x, y, z)
    }
}
