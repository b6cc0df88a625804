//! `embedded-hal` pin adapter
//!
//! Board HALs implement `embedded_hal::digital::OutputPin`; the motion core
//! wants the infallible `brachium_hal::OutputPin`. GPIO writes on the
//! supported MCUs cannot fail, so only pins with an `Infallible` error type
//! are accepted.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;

/// Wraps an `embedded-hal` 1.0 output pin
///
/// The driven level is cached so `is_set_high` does not need `&mut`.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut out = Self { pin, high: false };
        brachium_hal::OutputPin::set_low(&mut out);
        out
    }

    /// Wrap a pin and drive it high
    pub fn new_high(pin: P) -> Self {
        let mut out = Self { pin, high: true };
        brachium_hal::OutputPin::set_high(&mut out);
        out
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

fn infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<P: EhOutputPin<Error = Infallible>> brachium_hal::OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
