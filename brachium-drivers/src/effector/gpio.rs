//! GPIO effector output
//!
//! Status LEDs and anything else switched directly by a pin (or through a
//! MOSFET/relay).

use brachium_core::traits::Effector;
use brachium_hal::OutputPin;

/// GPIO effector
///
/// Drives one pin, active-high (default) or active-low.
pub struct GpioEffector<P> {
    pin: P,
    /// If true, active = pin LOW
    inverted: bool,
    /// Current logical state
    active: bool,
}

impl<P: OutputPin> GpioEffector<P> {
    /// Create a new GPIO effector, initially inactive
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the effector is active when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut effector = Self {
            pin,
            inverted,
            active: false,
        };
        effector.set_active(false);
        effector
    }

    /// Create a new GPIO effector with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO effector with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Effector for GpioEffector<P> {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.pin.set_state(active != self.inverted);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
