//! Complete arm configuration

use core::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::AxisConfig;
use super::types::ArmGeometry;
use crate::motion::Point;

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Configuration validation and persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Stored config has a different format version
    VersionMismatch,
    /// Link lengths, lead or margins are unusable
    InvalidGeometry,
    /// An axis has a zero or negative reduction, step count or interval
    InvalidAxis,
    /// Home pose is not a finite point
    InvalidHome,
    /// Status blink period is zero
    InvalidBlinkPeriod,
    /// Encoding failed (buffer too small)
    Serialize,
    /// Decoding failed (corrupt or truncated data)
    Deserialize,
}

/// Complete arm configuration
///
/// Axis naming follows the joints: `rotate` is the lead-screw rotation
/// axis, `lower` the shoulder, `upper` the elbow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Link geometry
    pub geometry: ArmGeometry,
    /// Rotation axis driver
    pub rotate: AxisConfig,
    /// Lower (shoulder) joint driver
    pub lower: AxisConfig,
    /// Upper (elbow) joint driver
    pub upper: AxisConfig,
    /// Calibrated home pose, re-seeded by `G28`
    pub home: Point,
    /// Status LED blink period in milliseconds (50% duty)
    pub blink_period_ms: u32,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            geometry: ArmGeometry::default(),
            rotate: AxisConfig {
                step_interval_us: 40,
                ..AxisConfig::with_gear_ratio(1.0)
            },
            lower: AxisConfig::with_gear_ratio(72.0 / 16.0),
            upper: AxisConfig::with_gear_ratio((62.0 / 16.0) * (62.0 / 33.0)),
            home: Point::new(0.0, 170.0, 0.0),
            blink_period_ms: 500,
        }
    }
}

impl ArmConfig {
    /// Check that the configuration describes a usable machine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        let g = &self.geometry;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(g.lower_link_mm)
            || !positive(g.upper_link_mm)
            || !g.lead_mm.is_finite()
            || g.lead_mm == 0.0
            || !g.upper_coupling.is_finite()
            || !g.parked_x_mm.is_finite()
            || !g.reach_margin_mm.is_finite()
            || g.reach_margin_mm < 0.0
            || g.reach_margin_mm >= g.reach()
        {
            return Err(ConfigError::InvalidGeometry);
        }

        for axis in [&self.rotate, &self.lower, &self.upper] {
            if !positive(axis.gear_ratio)
                || axis.steps_per_revolution == 0
                || axis.step_interval_us == 0
            {
                return Err(ConfigError::InvalidAxis);
            }
        }

        if !self.home.is_finite() {
            return Err(ConfigError::InvalidHome);
        }

        if self.blink_period_ms == 0 {
            return Err(ConfigError::InvalidBlinkPeriod);
        }

        Ok(())
    }

    /// Worst-case wrist displacement from one step on every joint, in mm
    ///
    /// Poses read back from step counts are only known to this resolution.
    pub fn step_resolution_mm(&self) -> f32 {
        let g = &self.geometry;
        let lower = 1.0 / self.lower.steps_per_radian();
        let upper = 1.0 / self.upper.steps_per_radian() + libm::fabsf(g.upper_coupling) * lower;
        let rotation = libm::fabsf(g.lead_mm) / (TAU * self.rotate.steps_per_radian());

        g.reach() * lower + g.upper_link_mm * upper + rotation
    }
}

#[cfg(feature = "serde")]
impl ArmConfig {
    /// Encode as postcard binary into `buf`, returning the used prefix
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode postcard binary and validate the result
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: ArmConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
