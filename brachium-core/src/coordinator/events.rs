//! Events that change the motion state

/// Motion gate events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionEvent {
    /// A move command was started
    MoveDispatched,
    /// Interpolation finished and every axis reached its target
    MoveSettled,
    /// The move was dropped (re-home, drivers released)
    MoveAbandoned,
}
