//! Line assembly from a serial byte stream
//!
//! Bytes arrive one at a time from the UART. The assembler buffers them until
//! a newline and then hands the finished line to the parser.

use heapless::Vec;

use crate::command::{Command, ParseError};
use crate::parser::parse_line;

/// Longest accepted line, excluding the terminator
pub const MAX_LINE_LEN: usize = 96;

/// Accumulates bytes into newline-terminated command lines
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// The current line ran past the buffer; it is discarded at the newline
    overflowed: bool,
}

impl LineAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of bytes buffered for the current line
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no partial line is buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && !self.overflowed
    }

    /// Feed a single byte
    ///
    /// Returns a command when `byte` completes a non-blank line. Overlong or
    /// non-text lines complete as [`Command::invalid`] rather than being
    /// dropped silently, so the sender still gets an answer.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match byte {
            b'\n' => self.finish_line(),
            b'\r' => None,
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }

    fn finish_line(&mut self) -> Option<Command> {
        let result = if self.overflowed {
            Some(Command::invalid(ParseError::LineTooLong))
        } else {
            match core::str::from_utf8(&self.buffer) {
                Ok(line) => parse_line(line),
                Err(_) => Some(Command::invalid(ParseError::NotText)),
            }
        };

        self.reset();
        result
    }
}
