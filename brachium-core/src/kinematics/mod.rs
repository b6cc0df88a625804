//! Arm kinematics
//!
//! Inverse kinematics for a two-link planar arm on a lead-screw rotation
//! axis, plus the matching forward chain.

pub mod solver;

pub use solver::{cosine_angle, Elbow, IkSolver, JointAngles, Solution, SINGULARITY_RADIUS_MM};
