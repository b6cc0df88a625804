//! Monotonic time abstractions
//!
//! The motion core measures everything against a free-running 32-bit
//! microsecond counter. The counter wraps roughly every 71.6 minutes, so all
//! comparisons go through [`elapsed_us`] and [`deadline_reached`], which stay
//! correct across the wrap as long as the compared instants are less than
//! half the counter range apart.

/// Monotonic microsecond clock with busy-wait delays
///
/// There is no scheduler underneath the control loop, so delays block the
/// caller. They are only used for sub-10 µs signal timing and for dwell.
pub trait Clock {
    /// Current value of the free-running microsecond counter
    fn now_us(&self) -> u32;

    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_us(&self) -> u32 {
        (**self).now_us()
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

/// Microseconds elapsed from `since` to `now`, modulo 2^32
#[inline]
pub fn elapsed_us(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Whether `now` is at or past `deadline`
///
/// Uses the signed distance between the two instants, so a deadline just
/// after the wrap is still "in the future" for a `now` just before it.
#[inline]
pub fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_plain() {
        assert_eq!(elapsed_us(1_500, 500), 1_000);
        assert_eq!(elapsed_us(42, 42), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let start = u32::MAX - 99;
        let now = start.wrapping_add(1_000);
        assert_eq!(now, 900);
        assert_eq!(elapsed_us(now, start), 1_000);
    }

    #[test]
    fn test_deadline_plain() {
        assert!(!deadline_reached(999, 1_000));
        assert!(deadline_reached(1_000, 1_000));
        assert!(deadline_reached(1_001, 1_000));
    }

    #[test]
    fn test_deadline_across_wrap() {
        let deadline = 10u32; // scheduled just after the wrap
        let before_wrap = u32::MAX - 5;
        assert!(!deadline_reached(before_wrap, deadline));
        assert!(deadline_reached(10, deadline));
        assert!(deadline_reached(11, deadline));
    }

    #[test]
    fn test_default_delay_ms() {
        struct Counting {
            total_us: u32,
        }

        impl Clock for Counting {
            fn now_us(&self) -> u32 {
                self.total_us
            }

            fn delay_us(&mut self, us: u32) {
                self.total_us += us;
            }
        }

        let mut clock = Counting { total_us: 0 };
        clock.delay_ms(3);
        assert_eq!(clock.now_us(), 3_000);
    }
}
