//! Coordinator telemetry
//!
//! The core never prints. Everything worth telling the operator comes back
//! from [`Coordinator::cycle`](super::Coordinator::cycle) as a [`Report`].

use brachium_protocol::{ParseError, Reply};

use crate::motion::Point;

/// Upper bound on reports produced by one cycle
pub const MAX_REPORTS_PER_CYCLE: usize = 4;

/// Reports from one cycle
pub type Reports = heapless::Vec<Report, MAX_REPORTS_PER_CYCLE>;

/// Something the operator should hear about
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// A move finished and all axes reached the end pose
    MoveComplete(Point),
    /// Position re-seeded at the home pose
    HomingComplete,
    /// Move target out of reach; the arm follows the clamped path
    ReachOverflow(Point),
    /// Well-formed command this arm does not implement
    UnknownCommand { letter: char, num: u16 },
    /// Line could not be parsed
    ParseError(ParseError),
    /// Stepper drivers switched on or off
    StepperPower(bool),
    /// Gripper closed (true) or opened
    Gripper(bool),
}

impl Report {
    /// Check if this report describes a problem with the input
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Report::ReachOverflow(_) | Report::UnknownCommand { .. } | Report::ParseError(_)
        )
    }

    /// Serial reply for this report, if the sender should see one
    pub fn reply(&self) -> Option<Reply<'static>> {
        match self {
            Report::MoveComplete(_) => None,
            Report::HomingComplete => Some(Reply::Info("HOMING COMPLETE")),
            Report::ReachOverflow(_) => Some(Reply::Info("IK overflow->limit")),
            Report::UnknownCommand { letter, num } => Some(Reply::UnknownCommand {
                letter: *letter,
                num: *num,
            }),
            Report::ParseError(_) => Some(Reply::Error("parsing Error")),
            Report::StepperPower(true) => Some(Reply::Info("steppers on")),
            Report::StepperPower(false) => Some(Reply::Info("steppers off")),
            Report::Gripper(true) => Some(Reply::Info("gripper closed")),
            Report::Gripper(false) => Some(Reply::Info("gripper open")),
        }
    }
}
