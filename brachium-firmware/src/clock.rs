//! Microsecond clock backed by the embassy time driver

use brachium_hal::Clock;
use embassy_time::{block_for, Duration, Instant};

/// Free-running microsecond clock
///
/// The 64-bit embassy tick counter runs at 1 MHz on the RP2040; the low
/// 32 bits give the wrapping counter the motion core expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
