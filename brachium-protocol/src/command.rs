//! Structured command records
//!
//! A [`Command`] is what the parser hands to the motion coordinator. Axis and
//! parameter words that were not present on the line are `None`; it is up to
//! the consumer to decide what "not provided" means (the coordinator keeps
//! the current position for missing axes).

/// Reason a line could not be turned into a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line does not start with a letter code (e.g. `G`, `M`)
    MissingCode,
    /// A word's numeric value is missing or malformed
    BadNumber,
    /// A parameter letter this protocol does not know
    UnknownParameter,
    /// Line exceeded the assembler buffer
    LineTooLong,
    /// Line is not valid UTF-8 / ASCII
    NotText,
}

/// Command letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandId {
    /// `G` motion/program codes
    G,
    /// `M` machine codes
    M,
    /// Syntactically valid but unrecognised letter
    Other(char),
    /// The line failed to parse
    Invalid(ParseError),
}

impl CommandId {
    /// Letter this id was parsed from, if any
    pub fn letter(&self) -> Option<char> {
        match self {
            CommandId::G => Some('G'),
            CommandId::M => Some('M'),
            CommandId::Other(c) => Some(*c),
            CommandId::Invalid(_) => None,
        }
    }
}

/// One parsed command line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Command letter
    pub id: CommandId,
    /// Command number (the `1` in `G1`)
    pub num: u16,
    /// Target X in mm
    pub x: Option<f32>,
    /// Target Y in mm
    pub y: Option<f32>,
    /// Target Z in mm
    pub z: Option<f32>,
    /// Auxiliary/extrusion axis in mm
    pub e: Option<f32>,
    /// Feed rate in mm/min
    pub f: Option<f32>,
    /// Time parameter in seconds (dwell)
    pub t: Option<f32>,
}

impl Command {
    /// Create a command with no parameters
    pub const fn new(id: CommandId, num: u16) -> Self {
        Self {
            id,
            num,
            x: None,
            y: None,
            z: None,
            e: None,
            f: None,
            t: None,
        }
    }

    /// Create a `G` command
    pub const fn g(num: u16) -> Self {
        Self::new(CommandId::G, num)
    }

    /// Create an `M` command
    pub const fn m(num: u16) -> Self {
        Self::new(CommandId::M, num)
    }

    /// Create the sentinel record for an unparseable line
    pub const fn invalid(reason: ParseError) -> Self {
        Self::new(CommandId::Invalid(reason), 0)
    }

    /// Check if this command parsed successfully
    pub fn is_valid(&self) -> bool {
        !matches!(self.id, CommandId::Invalid(_))
    }

    /// Builder: set X
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Builder: set Y
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Builder: set Z
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Builder: set E
    pub fn with_e(mut self, e: f32) -> Self {
        self.e = Some(e);
        self
    }

    /// Builder: set the feed rate (mm/min)
    pub fn with_f(mut self, f: f32) -> Self {
        self.f = Some(f);
        self
    }

    /// Builder: set the time parameter (seconds)
    pub fn with_t(mut self, t: f32) -> Self {
        self.t = Some(t);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let cmd = Command::g(1).with_x(10.0).with_f(600.0);
        assert_eq!(cmd.id, CommandId::G);
        assert_eq!(cmd.num, 1);
        assert_eq!(cmd.x, Some(10.0));
        assert_eq!(cmd.y, None);
        assert_eq!(cmd.f, Some(600.0));
        assert!(cmd.is_valid());
    }

    #[test]
    fn test_invalid_sentinel() {
        let cmd = Command::invalid(ParseError::BadNumber);
        assert!(!cmd.is_valid());
        assert_eq!(cmd.id.letter(), None);
    }

    #[test]
    fn test_letters() {
        assert_eq!(CommandId::G.letter(), Some('G'));
        assert_eq!(CommandId::M.letter(), Some('M'));
        assert_eq!(CommandId::Other('T').letter(), Some('T'));
    }
}
