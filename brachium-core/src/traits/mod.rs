//! Hardware abstraction traits
//!
//! Pin and clock traits live in `brachium-hal`; these cover the arm's
//! auxiliary equipment.

pub mod effector;

pub use effector::{Effector, NullEffector};
