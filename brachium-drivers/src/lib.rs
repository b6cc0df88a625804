//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in brachium-core and brachium-hal:
//!
//! - Two-state GPIO outputs (status LED, solenoid or vacuum grippers)
//! - Hobby servo gripper
//! - Adapter from `embedded-hal` 1.0 output pins to the brachium-hal pin trait

#![no_std]
#![deny(unsafe_code)]

pub mod effector;
pub mod pin;

pub use effector::{GpioEffector, ServoConfig, ServoGripper, ServoOutput};
pub use pin::EhOutput;
