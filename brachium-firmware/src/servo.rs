//! PWM servo output
//!
//! One PWM slice runs at the 50 Hz servo frame rate with 1 µs counter
//! ticks, so the compare value is the pulse width in microseconds.

use brachium_drivers::ServoOutput;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};

/// Servo frame period
pub const FRAME_US: u16 = 20_000;

/// PWM configuration for a servo on channel B, output initially idle
pub fn frame_config() -> Config {
    let mut config = Config::default();
    let divider = (clk_sys_freq() / 1_000_000) as u8;
    config.divider = divider.into();
    config.top = FRAME_US - 1;
    config.compare_b = 0;
    config
}

/// Servo on PWM channel B
pub struct PwmServo<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmServo<'d> {
    /// Wrap a PWM slice created with [`frame_config`]
    pub fn new(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            config: frame_config(),
        }
    }
}

impl ServoOutput for PwmServo<'_> {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        self.config.compare_b = width_us.min(FRAME_US - 1);
        self.pwm.set_config(&self.config);
    }
}
