//! The arm's three stepper axes

use brachium_hal::{Clock, OutputPin};

use super::axis::{StepperAxis, StepperPins};
use crate::config::ArmConfig;
use crate::kinematics::JointAngles;

/// Pins for all three joints
#[derive(Debug)]
pub struct JointPins<P> {
    pub rotate: StepperPins<P>,
    pub lower: StepperPins<P>,
    pub upper: StepperPins<P>,
}

/// Step counts of all three joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointSteps {
    pub rotation: i32,
    pub lower: i32,
    pub upper: i32,
}

/// Rotation, lower and upper stepper axes
#[derive(Debug)]
pub struct JointAxes<P: OutputPin> {
    pub rotate: StepperAxis<P>,
    pub lower: StepperAxis<P>,
    pub upper: StepperAxis<P>,
}

impl<P: OutputPin> JointAxes<P> {
    /// Create the three axes, disabled at step zero
    pub fn new(pins: JointPins<P>, config: &ArmConfig) -> Self {
        Self {
            rotate: StepperAxis::new(pins.rotate, config.rotate),
            lower: StepperAxis::new(pins.lower, config.lower),
            upper: StepperAxis::new(pins.upper, config.upper),
        }
    }

    /// Tick rotate, lower and upper in that order, each at its own step
    /// interval. Returns the number of pulses emitted.
    pub fn tick<C: Clock>(&mut self, clock: &mut C) -> u8 {
        let mut pulses = 0;
        for axis in [&mut self.rotate, &mut self.lower, &mut self.upper] {
            let interval = axis.config().step_interval_us;
            if axis.tick(clock, interval) {
                pulses += 1;
            }
        }
        pulses
    }

    /// Move towards the given joint angles
    pub fn set_target_angles(&mut self, angles: &JointAngles) {
        self.rotate.set_target_angle(angles.rotation);
        self.lower.set_target_angle(angles.lower);
        self.upper.set_target_angle(angles.upper);
    }

    /// Re-seed all positions without moving
    pub fn set_current_angles(&mut self, angles: &JointAngles) {
        self.rotate.set_current_angle(angles.rotation);
        self.lower.set_current_angle(angles.lower);
        self.upper.set_current_angle(angles.upper);
    }

    /// Joint angles of the current positions
    pub fn angles(&self) -> JointAngles {
        JointAngles {
            rotation: self.rotate.angle(),
            lower: self.lower.angle(),
            upper: self.upper.angle(),
        }
    }

    pub fn steps(&self) -> JointSteps {
        JointSteps {
            rotation: self.rotate.current_steps(),
            lower: self.lower.current_steps(),
            upper: self.upper.current_steps(),
        }
    }

    /// Stop every axis where it is
    pub fn hold(&mut self) {
        self.rotate.hold();
        self.lower.hold();
        self.upper.hold();
    }

    pub fn enable(&mut self, on: bool) {
        self.rotate.enable(on);
        self.lower.enable(on);
        self.upper.enable(on);
    }

    pub fn is_enabled(&self) -> bool {
        self.rotate.is_enabled() && self.lower.is_enabled() && self.upper.is_enabled()
    }

    pub fn all_on_target(&self) -> bool {
        self.rotate.is_on_target() && self.lower.is_on_target() && self.upper.is_on_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Bench;

    #[test]
    fn test_tick_order_and_intervals() {
        let bench = Bench::new();
        let config = ArmConfig::default();
        let mut axes = JointAxes::new(bench.joint_pins(), &config);

        axes.rotate.set_target_steps(2);
        axes.lower.set_target_steps(2);
        axes.upper.set_target_steps(2);

        let mut clock = bench.clock();
        assert_eq!(axes.tick(&mut clock), 3);

        let rot = bench.rising_edges("rot.step")[0];
        let low = bench.rising_edges("low.step")[0];
        let up = bench.rising_edges("up.step")[0];
        assert!(rot < low && low < up);

        // Rotation steps every 40 µs, the joints every 200 µs
        bench.advance(60);
        assert_eq!(axes.tick(&mut clock), 1);
        assert_eq!(axes.steps(), JointSteps { rotation: 2, lower: 1, upper: 1 });
    }

    #[test]
    fn test_angles_round_trip_through_steps() {
        let bench = Bench::new();
        let config = ArmConfig::default();
        let mut axes = JointAxes::new(bench.joint_pins(), &config);

        let angles = JointAngles {
            rotation: 3.0,
            lower: -0.4,
            upper: 1.1,
        };
        axes.set_current_angles(&angles);

        assert!(axes.all_on_target());
        let back = axes.angles();
        assert!((back.rotation - 3.0).abs() < 2e-3);
        assert!((back.lower + 0.4).abs() < 1e-3);
        assert!((back.upper - 1.1).abs() < 1e-3);
    }

    #[test]
    fn test_enable_all() {
        let bench = Bench::new();
        let mut axes = JointAxes::new(bench.joint_pins(), &ArmConfig::default());
        assert!(!axes.is_enabled());

        axes.enable(true);
        assert!(axes.is_enabled());
        for line in ["rot.en", "low.en", "up.en"] {
            assert_eq!(bench.level(line), Some(false));
        }
    }
}
