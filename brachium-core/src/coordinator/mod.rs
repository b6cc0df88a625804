//! Motion coordinator
//!
//! Runs the arm's single control loop: step the joints, track the active
//! move through the kinematics, and take the next command when idle.

pub mod blink;
pub mod controller;
pub mod events;
pub mod machine;
pub mod report;

pub use blink::StatusBlink;
pub use controller::{Coordinator, MotionContext};
pub use events::MotionEvent;
pub use machine::MotionState;
pub use report::{Report, Reports, MAX_REPORTS_PER_CYCLE};
