//! Board-agnostic motion core for the Brachium arm firmware
//!
//! This crate contains everything between a parsed command and a step pulse
//! that does not depend on a specific board:
//!
//! - Cartesian interpolation with a cosine ease-in/out
//! - Inverse kinematics for the two-link arm and its lead-screw rotation axis
//! - Per-axis step pulse generation with DIR setup timing
//! - The command queue and the single-loop motion coordinator
//! - Configuration type definitions
//!
//! Hardware is reached only through the `brachium-hal` traits, so the whole
//! crate runs on the host under test.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod coordinator;
pub mod kinematics;
pub mod motion;
pub mod stepper;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
