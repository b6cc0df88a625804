//! Hobby servo gripper
//!
//! A standard 50 Hz RC servo closes and opens the gripper jaws. The servo
//! position is set by the high time of its control pulse, roughly 0.5 ms
//! at 0° to 2.4 ms at 180°.

use brachium_core::traits::Effector;

/// Servo control pulse output
///
/// Implemented by the board over a PWM channel running at the servo frame
/// rate.
pub trait ServoOutput {
    /// Set the control pulse high time in microseconds
    fn set_pulse_width_us(&mut self, width_us: u16);
}

impl<T: ServoOutput + ?Sized> ServoOutput for &mut T {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        (**self).set_pulse_width_us(width_us);
    }
}

/// Servo gripper configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Servo angle with the jaws closed
    pub grip_deg: f32,
    /// Servo angle with the jaws open
    pub release_deg: f32,
    /// Pulse width at 0°
    pub min_pulse_us: u16,
    /// Pulse width at 180°
    pub max_pulse_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            grip_deg: 90.0,
            release_deg: 45.0,
            min_pulse_us: 544,
            max_pulse_us: 2400,
        }
    }
}

impl ServoConfig {
    /// Pulse width for a servo angle, clamped to 0..=180°
    pub fn pulse_for(&self, degrees: f32) -> u16 {
        let degrees = if degrees.is_finite() {
            degrees.clamp(0.0, 180.0)
        } else {
            0.0
        };
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as f32;
        self.min_pulse_us + (span * degrees / 180.0 + 0.5) as u16
    }
}

/// Servo-driven gripper
pub struct ServoGripper<S> {
    output: S,
    config: ServoConfig,
    gripping: bool,
}

impl<S: ServoOutput> ServoGripper<S> {
    /// Create a new gripper and move it to the open position
    pub fn new(output: S, config: ServoConfig) -> Self {
        let mut gripper = Self {
            output,
            config,
            gripping: false,
        };
        gripper.set_active(false);
        gripper
    }

    pub fn config(&self) -> &ServoConfig {
        &self.config
    }

    /// Drive the servo to an arbitrary angle
    ///
    /// The logical grip state is left unchanged.
    pub fn set_angle(&mut self, degrees: f32) {
        let width = self.config.pulse_for(degrees);
        self.output.set_pulse_width_us(width);
    }
}

impl<S: ServoOutput> Effector for ServoGripper<S> {
    fn set_active(&mut self, active: bool) {
        self.gripping = active;
        let angle = if active {
            self.config.grip_deg
        } else {
            self.config.release_deg
        };
        self.set_angle(angle);
    }

    fn is_active(&self) -> bool {
        self.gripping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockServo {
        width_us: Option<u16>,
    }

    impl ServoOutput for MockServo {
        fn set_pulse_width_us(&mut self, width_us: u16) {
            self.width_us = Some(width_us);
        }
    }

    #[test]
    fn test_pulse_mapping() {
        let config = ServoConfig::default();
        assert_eq!(config.pulse_for(0.0), 544);
        assert_eq!(config.pulse_for(180.0), 2400);
        assert_eq!(config.pulse_for(90.0), 1472);
        assert_eq!(config.pulse_for(-20.0), 544);
        assert_eq!(config.pulse_for(400.0), 2400);
        assert_eq!(config.pulse_for(f32::NAN), 544);
    }

    #[test]
    fn test_starts_open() {
        let mut servo = MockServo { width_us: None };
        let gripper = ServoGripper::new(&mut servo, ServoConfig::default());
        assert!(!gripper.is_active());
        drop(gripper);

        // 45° release angle
        assert_eq!(servo.width_us, Some(1008));
    }

    #[test]
    fn test_grip_and_release() {
        let mut servo = MockServo { width_us: None };
        let mut gripper = ServoGripper::new(&mut servo, ServoConfig::default());

        gripper.set_active(true);
        assert!(gripper.is_active());
        gripper.set_active(false);
        assert!(!gripper.is_active());

        gripper.set_active(true);
        drop(gripper);
        assert_eq!(servo.width_us, Some(1472));
    }
}
