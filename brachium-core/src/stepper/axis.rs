//! Single stepper axis pulse generator

use brachium_hal::{deadline_reached, Clock, OutputPin};

use crate::config::AxisConfig;

/// Time between a DIR change and the next STEP edge
pub const DIR_SETUP_US: u32 = 2;

/// STEP high time
pub const STEP_PULSE_US: u32 = 2;

/// Driver control lines for one axis
#[derive(Debug)]
pub struct StepperPins<P> {
    pub step: P,
    pub dir: P,
    pub enable: P,
}

/// One stepper axis tracking a target step count
///
/// Position is open-loop: `current_steps` counts the pulses emitted, it
/// moves by one per pulse towards `target_steps` and never overshoots.
#[derive(Debug)]
pub struct StepperAxis<P: OutputPin> {
    pins: StepperPins<P>,
    config: AxisConfig,
    steps_per_radian: f32,
    current_steps: i32,
    target_steps: i32,
    /// Level last driven on DIR, `None` until the first step
    last_direction_high: Option<bool>,
    /// Earliest time of the next pulse, `None` when one may go now
    next_pulse_due_us: Option<u32>,
    enabled: bool,
}

impl<P: OutputPin> StepperAxis<P> {
    /// Create a new axis at step zero with the driver disabled
    ///
    /// # Arguments
    /// - `pins`: STEP, DIR and ENABLE outputs
    /// - `config`: reduction, polarity and step rate of this axis
    pub fn new(pins: StepperPins<P>, config: AxisConfig) -> Self {
        let mut axis = Self {
            pins,
            config,
            steps_per_radian: config.steps_per_radian(),
            current_steps: 0,
            target_steps: 0,
            last_direction_high: None,
            next_pulse_due_us: None,
            enabled: false,
        };
        axis.pins.step.set_low();
        axis.enable(false);
        axis
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn steps_per_radian(&self) -> f32 {
        self.steps_per_radian
    }

    /// Set the step count to move towards
    pub fn set_target_steps(&mut self, steps: i32) {
        self.target_steps = steps;
    }

    /// Re-seed the position without moving
    ///
    /// The target follows, so no pulses result.
    pub fn set_current_steps(&mut self, steps: i32) {
        self.current_steps = steps;
        self.target_steps = steps;
    }

    /// Set the target as a joint angle in radians
    pub fn set_target_angle(&mut self, radians: f32) {
        self.target_steps = self.angle_to_steps(radians);
    }

    /// Re-seed the position as a joint angle in radians
    pub fn set_current_angle(&mut self, radians: f32) {
        let steps = self.angle_to_steps(radians);
        self.set_current_steps(steps);
    }

    /// Stop where the axis is now
    pub fn hold(&mut self) {
        self.target_steps = self.current_steps;
    }

    pub fn current_steps(&self) -> i32 {
        self.current_steps
    }

    pub fn target_steps(&self) -> i32 {
        self.target_steps
    }

    /// Joint angle of the current position in radians
    pub fn angle(&self) -> f32 {
        self.current_steps as f32 / self.steps_per_radian
    }

    /// Joint angle of the target in radians
    pub fn target_angle(&self) -> f32 {
        self.target_steps as f32 / self.steps_per_radian
    }

    pub fn is_on_target(&self) -> bool {
        self.current_steps == self.target_steps
    }

    /// Energise or release the driver
    pub fn enable(&mut self, on: bool) {
        self.enabled = on;
        self.pins.enable.set_state(on != self.config.enable_active_low);
    }

    pub fn disable(&mut self) {
        self.enable(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit at most one step towards the target
    ///
    /// Changes DIR first when the direction flips, waiting
    /// [`DIR_SETUP_US`] before the step edge. A pulse is only emitted once
    /// `inter_step_delay_us` has passed since the previous one; the next
    /// deadline is taken after the pulse, so the effective period is the
    /// delay plus the pulse and loop overhead.
    ///
    /// Returns true when a pulse was emitted.
    pub fn tick<C: Clock>(&mut self, clock: &mut C, inter_step_delay_us: u32) -> bool {
        if self.target_steps == self.current_steps {
            // Drop an expired deadline so it cannot alias after a counter wrap
            if let Some(due) = self.next_pulse_due_us {
                if deadline_reached(clock.now_us(), due) {
                    self.next_pulse_due_us = None;
                }
            }
            return false;
        }

        let forward = self.target_steps > self.current_steps;
        let dir_high = forward != self.config.inverted;
        if self.last_direction_high != Some(dir_high) {
            self.pins.dir.set_state(dir_high);
            self.last_direction_high = Some(dir_high);
            clock.delay_us(DIR_SETUP_US);
        }

        if let Some(due) = self.next_pulse_due_us {
            if !deadline_reached(clock.now_us(), due) {
                return false;
            }
        }

        self.pins.step.set_high();
        clock.delay_us(STEP_PULSE_US);
        self.pins.step.set_low();

        self.current_steps += if forward { 1 } else { -1 };
        self.next_pulse_due_us = Some(clock.now_us().wrapping_add(inter_step_delay_us));
        true
    }

    fn angle_to_steps(&self, radians: f32) -> i32 {
        libm::roundf(radians * self.steps_per_radian) as i32
    }
}
