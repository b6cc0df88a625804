//! Step/direction stepper output
//!
//! Each joint is driven by a step/dir driver (A4988, DRV8825, TMC in
//! standalone mode). Pulses are generated in software from the control
//! loop: every call to [`StepperAxis::tick`] emits at most one step.

pub mod axis;
pub mod joints;

pub use axis::{StepperAxis, StepperPins, DIR_SETUP_US, STEP_PULSE_US};
pub use joints::{JointAxes, JointPins, JointSteps};
