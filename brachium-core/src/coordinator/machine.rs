//! Motion gate
//!
//! While a move is in flight no new command is taken from the queue.

use super::events::MotionEvent;

/// Coordinator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Holding position, commands are dispatched
    #[default]
    Idle,
    /// Tracking a move
    Moving,
}

impl MotionState {
    /// Check if commands may be taken from the queue
    pub fn accepts_commands(&self) -> bool {
        matches!(self, MotionState::Idle)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: MotionEvent) -> Self {
        use MotionEvent::*;
        use MotionState::*;

        match (self, event) {
            (Idle, MoveDispatched) => Moving,
            (Moving, MoveDispatched) => Moving,
            (Moving, MoveSettled) => Idle,
            (_, MoveAbandoned) => Idle,

            // Settling while idle has no effect
            (Idle, MoveSettled) => Idle,
        }
    }
}
