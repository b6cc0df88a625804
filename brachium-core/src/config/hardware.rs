//! Per-axis stepper hardware configuration

use core::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full steps per motor revolution for common 1.8° motors
pub const FULL_STEPS_PER_REV: u32 = 200;

/// Default driver microstepping
pub const DEFAULT_MICROSTEPS: u32 = 16;

/// Stepper axis hardware configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Reduction between motor and joint (motor turns per joint turn)
    pub gear_ratio: f32,
    /// Microsteps per motor revolution (full steps × microstepping)
    pub steps_per_revolution: u32,
    /// Invert the DIR line
    pub inverted: bool,
    /// Driver ENABLE input is active-low (A4988, DRV8825, TMC in step/dir mode)
    pub enable_active_low: bool,
    /// Minimum time between step pulses in microseconds
    pub step_interval_us: u32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            gear_ratio: 1.0,
            steps_per_revolution: FULL_STEPS_PER_REV * DEFAULT_MICROSTEPS,
            inverted: false,
            enable_active_low: true,
            step_interval_us: 200,
        }
    }
}

impl AxisConfig {
    /// Create an axis config with the given reduction and default driver
    /// settings
    pub fn with_gear_ratio(gear_ratio: f32) -> Self {
        Self {
            gear_ratio,
            ..Default::default()
        }
    }

    /// Steps per radian of joint rotation
    pub fn steps_per_radian(&self) -> f32 {
        self.gear_ratio * self.steps_per_revolution as f32 / TAU
    }
}
