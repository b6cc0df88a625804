//! Eased point-to-point interpolation
//!
//! A move runs from a start point along a straight line with a cosine
//! ease-in/ease-out profile. The duration is `distance / speed`; the
//! profile shape is the same for every move.
//!
//! Time is read from a free-running 32-bit microsecond counter, so all
//! elapsed-time arithmetic is wrap-safe.

use core::f32::consts::PI;

use brachium_hal::elapsed_us;

use super::point::Point;

/// Duration of a move issued without a usable speed
pub const DEFAULT_MOVE_DURATION_S: f32 = 2.0;

/// Moves shorter than this complete instantly
pub const MIN_MOVE_DISTANCE_MM: f32 = 1e-6;

/// Cosine ease-in/ease-out
///
/// Maps normalised time `u` in `[0, 1]` to progress in `[0, 1]`, with zero
/// slope at both ends. Input is clamped.
pub fn ease_in_out(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    0.5 - 0.5 * libm::cosf(u * PI)
}

/// Interpolator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpolationState {
    /// At rest at `current`
    Idle,
    /// A move is in progress
    Running,
}

/// Point-to-point interpolator
#[derive(Debug, Clone)]
pub struct Interpolator {
    state: InterpolationState,
    start: Point,
    delta: Point,
    /// Normalised time per second (speed / distance)
    time_multiplier: f32,
    start_time_us: u32,
    progress: f32,
    current: Point,
}

impl Interpolator {
    /// Create an idle interpolator resting at `pose`
    pub fn new(pose: Point) -> Self {
        Self {
            state: InterpolationState::Idle,
            start: pose,
            delta: Point::ZERO,
            time_multiplier: 0.0,
            start_time_us: 0,
            progress: 1.0,
            current: pose,
        }
    }

    /// Re-seed the pose, abandoning any move in flight
    pub fn set_current_pose(&mut self, pose: Point) {
        *self = Self::new(pose);
    }

    /// Start a move
    ///
    /// # Arguments
    /// - `from`: start point, normally the current pose
    /// - `to`: end point
    /// - `speed_mm_s`: average speed; zero, negative or non-finite selects
    ///   a move lasting [`DEFAULT_MOVE_DURATION_S`]
    /// - `now_us`: current time from the microsecond clock
    pub fn begin_move(&mut self, from: Point, to: Point, speed_mm_s: f32, now_us: u32) {
        let distance = from.distance_to(&to);
        if !(distance > MIN_MOVE_DISTANCE_MM) {
            self.set_current_pose(to);
            return;
        }

        let speed = if speed_mm_s.is_finite() && speed_mm_s > 0.0 {
            speed_mm_s
        } else {
            distance / DEFAULT_MOVE_DURATION_S
        };

        self.state = InterpolationState::Running;
        self.start = from;
        self.delta = to - from;
        self.time_multiplier = speed / distance;
        self.start_time_us = now_us;
        self.progress = 0.0;
        self.current = from;
    }

    /// Advance the move to `now_us`
    ///
    /// Does nothing when idle. The move ends exactly at its end point once
    /// the normalised time reaches one.
    pub fn advance(&mut self, now_us: u32) {
        if self.state == InterpolationState::Idle {
            return;
        }

        let elapsed_s = elapsed_us(now_us, self.start_time_us) as f32 / 1_000_000.0;
        let u = elapsed_s * self.time_multiplier;

        if u >= 1.0 {
            self.progress = 1.0;
            self.state = InterpolationState::Idle;
        } else {
            self.progress = ease_in_out(u);
        }

        self.current = self.start.add_scaled(self.delta, self.progress);
    }

    /// True when no move is in progress
    pub fn is_finished(&self) -> bool {
        self.state == InterpolationState::Idle
    }

    pub fn state(&self) -> InterpolationState {
        self.state
    }

    /// Current interpolated pose
    pub fn pose(&self) -> Point {
        self.current
    }

    /// Eased progress of the current move in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// End point of the current (or last) move
    pub fn target(&self) -> Point {
        self.start + self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Point, b: Point, tol: f32) -> bool {
        (a.x - b.x).abs() <= tol
            && (a.y - b.y).abs() <= tol
            && (a.z - b.z).abs() <= tol
            && (a.e - b.e).abs() <= tol
    }

    #[test]
    fn test_new_is_idle_at_pose() {
        let home = Point::new(0.0, 170.0, 0.0);
        let interp = Interpolator::new(home);

        assert!(interp.is_finished());
        assert_eq!(interp.pose(), home);
        assert_eq!(interp.progress(), 1.0);
    }

    #[test]
    fn test_midpoint_of_ten_millimetre_move() {
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::ZERO, Point::new(10.0, 0.0, 0.0), 5.0, 0);
        assert_eq!(interp.state(), InterpolationState::Running);

        // 10 mm at 5 mm/s: halfway in time is halfway in space
        interp.advance(1_000_000);
        assert!((interp.pose().x - 5.0).abs() < 1e-4);
        assert!(!interp.is_finished());

        interp.advance(2_000_000);
        assert!(interp.is_finished());
        assert!(close(interp.pose(), Point::new(10.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_ease_is_slow_at_the_ends() {
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::ZERO, Point::new(10.0, 0.0, 0.0), 5.0, 0);

        interp.advance(200_000);
        // Linear would be 1.0 mm after 10% of the time
        assert!(interp.pose().x < 1.0);
        assert!(interp.pose().x > 0.0);
    }

    #[test]
    fn test_advance_across_clock_wrap() {
        let start = u32::MAX - 500_000;
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::ZERO, Point::new(10.0, 0.0, 0.0), 5.0, start);

        interp.advance(start.wrapping_add(1_000_000));
        assert!((interp.pose().x - 5.0).abs() < 1e-4);

        interp.advance(start.wrapping_add(2_000_001));
        assert!(interp.is_finished());
    }

    #[test]
    fn test_degenerate_move_snaps() {
        let target = Point::new(1.0, 2.0, 3.0).with_e(7.0);
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::new(1.0, 2.0, 3.0), target, 50.0, 1234);

        assert!(interp.is_finished());
        assert_eq!(interp.pose(), target);
    }

    #[test]
    fn test_default_duration_without_speed() {
        for speed in [0.0, -3.0, f32::NAN] {
            let mut interp = Interpolator::new(Point::ZERO);
            interp.begin_move(Point::ZERO, Point::new(0.0, 40.0, 0.0), speed, 0);

            interp.advance(1_999_000);
            assert!(!interp.is_finished());
            interp.advance(2_000_000);
            assert!(interp.is_finished());
            assert!(close(interp.pose(), Point::new(0.0, 40.0, 0.0), 1e-4));
        }
    }

    #[test]
    fn test_set_current_pose_abandons_move() {
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::ZERO, Point::new(100.0, 0.0, 0.0), 10.0, 0);
        interp.advance(3_000_000);

        let here = interp.pose();
        interp.set_current_pose(here);
        assert!(interp.is_finished());

        interp.advance(9_000_000);
        assert_eq!(interp.pose(), here);
    }

    #[test]
    fn test_auxiliary_channel_is_interpolated() {
        let mut interp = Interpolator::new(Point::ZERO);
        interp.begin_move(Point::ZERO, Point::new(10.0, 0.0, 0.0).with_e(4.0), 10.0, 0);

        interp.advance(500_000);
        assert!((interp.pose().e - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-1.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_ease_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out(lo) <= ease_in_out(hi) + 1e-6);
        }

        #[test]
        fn prop_progress_stays_in_range(
            t1 in 0u32..5_000_000,
            t2 in 0u32..5_000_000,
            speed in 0.5f32..200.0,
        ) {
            let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let mut interp = Interpolator::new(Point::ZERO);
            interp.begin_move(Point::ZERO, Point::new(30.0, 40.0, 0.0), speed, 0);

            interp.advance(early);
            let p1 = interp.progress();
            interp.advance(late);
            let p2 = interp.progress();

            prop_assert!((0.0..=1.0).contains(&p1));
            prop_assert!((0.0..=1.0).contains(&p2));
            prop_assert!(p1 <= p2 + 1e-6);
        }
    }
}
