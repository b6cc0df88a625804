//! Mechanical geometry of the arm

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Link lengths and couplings used by the kinematics solver
///
/// All lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmGeometry {
    /// Shoulder-to-elbow link length (L1)
    pub lower_link_mm: f32,
    /// Elbow-to-wrist link length (L2)
    pub upper_link_mm: f32,
    /// Lead-screw travel per revolution of the rotation axis.
    /// A negative lead reverses the rotation sense.
    pub lead_mm: f32,
    /// Upper joint reaction to lower joint motion through the shared
    /// gear train (upper:lower gear ratio)
    pub upper_coupling: f32,
    /// X beyond which the arm is considered parked and always solved
    /// elbow-down
    pub parked_x_mm: f32,
    /// How far inside full extension an out-of-reach target is clamped
    pub reach_margin_mm: f32,
}

impl Default for ArmGeometry {
    fn default() -> Self {
        Self {
            lower_link_mm: 135.0,
            upper_link_mm: 147.0,
            lead_mm: 8.0,
            upper_coupling: 33.0 / 62.0,
            parked_x_mm: 135.0,
            reach_margin_mm: 0.001,
        }
    }
}

impl ArmGeometry {
    /// Full planar extension (L1 + L2)
    pub fn reach(&self) -> f32 {
        self.lower_link_mm + self.upper_link_mm
    }

    /// Planar radius an out-of-reach target is clamped to
    pub fn clamped_reach(&self) -> f32 {
        self.reach() - self.reach_margin_mm
    }
}
