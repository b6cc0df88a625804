//! Command intake
//!
//! Parsed commands wait here until the coordinator is idle.

pub mod queue;

pub use brachium_protocol::{Command, CommandId};
pub use queue::{CommandQueue, QueueError, COMMAND_QUEUE_CAPACITY};
