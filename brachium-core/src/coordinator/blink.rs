//! Status LED heartbeat

use brachium_hal::elapsed_us;

/// Longest period whose length in microseconds fits the clock
const MAX_PERIOD_MS: u32 = u32::MAX / 2 / 1000;

/// Square-wave heartbeat, lit for the first half of each period
///
/// The period start is advanced one whole period at a time, so the phase
/// survives the 32-bit microsecond counter wrapping as long as the heartbeat
/// is polled at least once per half wrap.
#[derive(Debug, Clone, Copy)]
pub struct StatusBlink {
    period_ms: u32,
    period_start_us: u32,
}

impl StatusBlink {
    /// Create a heartbeat whose first period starts at `epoch_us`
    pub fn new(period_ms: u32, epoch_us: u32) -> Self {
        Self {
            period_ms: period_ms.clamp(2, MAX_PERIOD_MS),
            period_start_us: epoch_us,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// LED level at `now_us`, rolling the period start forward
    pub fn update(&mut self, now_us: u32) -> bool {
        let period_us = self.period_ms * 1000;
        let mut elapsed = elapsed_us(now_us, self.period_start_us);
        if elapsed >= period_us {
            let whole = elapsed - elapsed % period_us;
            self.period_start_us = self.period_start_us.wrapping_add(whole);
            elapsed -= whole;
        }
        elapsed < period_us / 2
    }
}
