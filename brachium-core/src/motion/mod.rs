//! Cartesian motion
//!
//! Points in arm space and the eased point-to-point interpolator that
//! moves the end effector between them.

pub mod interpolation;
pub mod point;

pub use interpolation::{
    ease_in_out, InterpolationState, Interpolator, DEFAULT_MOVE_DURATION_S, MIN_MOVE_DISTANCE_MM,
};
pub use point::Point;
