//! Serial command protocol for the Brachium arm
//!
//! The arm is driven over a plain text serial link, one G-code style command
//! per line:
//!
//! ```text
//! G1 X120 Y80 Z10 F1200   ; move (feed rate in mm/min)
//! G4 T0.5                 ; dwell half a second
//! G28                     ; re-home at the calibrated pose
//! M3 / M5                 ; gripper grip / release
//! M17 / M18               ; stepper drivers on / off
//! ```
//!
//! Bytes are assembled into lines by [`LineAssembler`], lines become
//! structured [`Command`] records via [`parse_line`], and the controller
//! answers with [`Reply`] lines. Malformed input never fails loudly: it
//! produces a command whose id is [`CommandId::Invalid`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod parser;
pub mod reply;

pub use command::{Command, CommandId, ParseError};
pub use line::{LineAssembler, MAX_LINE_LEN};
pub use parser::parse_line;
pub use reply::{Reply, ReplyError, ReplyLine, MAX_REPLY_LEN};
