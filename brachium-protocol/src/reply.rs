//! Reply lines sent back over the serial link
//!
//! Every accepted line is acknowledged with `ok`. Status and error text is
//! sent as `//` comment lines so G-code senders display it without treating
//! it as a response; `!!` marks a fault.

use core::fmt::Write;

use heapless::String;

/// Maximum reply line length, including the trailing newline
pub const MAX_REPLY_LEN: usize = 64;

/// A formatted reply line
pub type ReplyLine = String<MAX_REPLY_LEN>;

/// Errors that can occur while formatting a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplyError {
    /// Formatted text did not fit in [`MAX_REPLY_LEN`]
    TooLong,
}

/// Replies from the arm to the command sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply<'a> {
    /// Line accepted into the queue
    Ok,
    /// Informational status text
    Info(&'a str),
    /// Error text
    Error(&'a str),
    /// A well-formed command this machine does not implement
    UnknownCommand { letter: char, num: u16 },
    /// Fault marker following an error
    Fault,
}

impl<'a> Reply<'a> {
    /// Format this reply into `out`, replacing its contents
    pub fn write_to(&self, out: &mut ReplyLine) -> Result<(), ReplyError> {
        out.clear();
        let result = match self {
            Reply::Ok => out.write_str("ok\n"),
            Reply::Info(text) => writeln!(out, "// INFO: {}", text),
            Reply::Error(text) => writeln!(out, "// ERR: {}", text),
            Reply::UnknownCommand { letter, num } => {
                writeln!(out, "// ERR: Unknown Cmd {}{}", letter, num)
            }
            Reply::Fault => out.write_str("!!\n"),
        };
        result.map_err(|_| ReplyError::TooLong)
    }

    /// Format this reply into a new line buffer
    pub fn to_line(&self) -> Result<ReplyLine, ReplyError> {
        let mut line = ReplyLine::new();
        self.write_to(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replies() {
        assert_eq!(Reply::Ok.to_line().unwrap().as_str(), "ok\n");
        assert_eq!(Reply::Fault.to_line().unwrap().as_str(), "!!\n");
    }

    #[test]
    fn test_text_replies() {
        let line = Reply::Info("HOMING COMPLETE").to_line().unwrap();
        assert_eq!(line.as_str(), "// INFO: HOMING COMPLETE\n");

        let line = Reply::Error("parsing Error").to_line().unwrap();
        assert_eq!(line.as_str(), "// ERR: parsing Error\n");
    }

    #[test]
    fn test_unknown_command_reply() {
        let line = Reply::UnknownCommand {
            letter: 'G',
            num: 99,
        }
        .to_line()
        .unwrap();
        assert_eq!(line.as_str(), "// ERR: Unknown Cmd G99\n");
    }

    #[test]
    fn test_too_long() {
        let text = "x".repeat(MAX_REPLY_LEN);
        assert_eq!(Reply::Info(&text).to_line(), Err(ReplyError::TooLong));
    }

    #[test]
    fn test_write_to_replaces_contents() {
        let mut line = ReplyLine::new();
        Reply::Info("first").write_to(&mut line).unwrap();
        Reply::Ok.write_to(&mut line).unwrap();
        assert_eq!(line.as_str(), "ok\n");
    }
}
