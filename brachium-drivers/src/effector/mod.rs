//! Auxiliary effector implementations

pub mod gpio;
pub mod servo;

pub use gpio::GpioEffector;
pub use servo::{ServoConfig, ServoGripper, ServoOutput};
