//! G-code line parser
//!
//! Turns one line of text into a [`Command`]. Accepted grammar, loosely:
//!
//! ```text
//! line    := code word* comment?
//! code    := letter integer             ; G1, M17, ...
//! word    := letter number              ; X10.5, F1200, T0.25, P250
//! comment := ';' anything | '(' anything ')'
//! ```
//!
//! Whitespace between words is optional (`G1X10Y20` is fine). Letters are
//! case-insensitive. `P` is a dwell time in milliseconds and is folded into
//! `t` (seconds) when no `T` word is present.

use crate::command::{Command, CommandId, ParseError};

/// Parse one line of text
///
/// Returns `None` for blank and comment-only lines. Anything else yields a
/// command; lines that fail to parse yield [`Command::invalid`].
pub fn parse_line(line: &str) -> Option<Command> {
    let line = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let mut words = Words::new(line);
    let (letter, digits) = match words.next()? {
        Ok(word) => word,
        Err(_) => return Some(Command::invalid(ParseError::MissingCode)),
    };

    Some(parse_command(letter, digits, &mut words).unwrap_or_else(Command::invalid))
}

fn parse_command(
    letter: char,
    digits: &str,
    words: &mut Words<'_>,
) -> Result<Command, ParseError> {
    let num: u16 = digits.parse().map_err(|_| ParseError::BadNumber)?;
    let id = match letter {
        'G' => CommandId::G,
        'M' => CommandId::M,
        other => CommandId::Other(other),
    };

    let mut cmd = Command::new(id, num);
    let mut dwell_ms = None;

    for word in words {
        let (letter, digits) = word.map_err(|_| ParseError::UnknownParameter)?;
        let value: f32 = digits.parse().map_err(|_| ParseError::BadNumber)?;

        match letter {
            'X' => cmd.x = Some(value),
            'Y' => cmd.y = Some(value),
            'Z' => cmd.z = Some(value),
            'E' => cmd.e = Some(value),
            'F' => cmd.f = Some(value),
            'T' => cmd.t = Some(value),
            'P' => dwell_ms = Some(value),
            _ => return Err(ParseError::UnknownParameter),
        }
    }

    if cmd.t.is_none() {
        cmd.t = dwell_ms.map(|ms| ms / 1000.0);
    }

    Ok(cmd)
}

/// Iterator over `letter + number` words, skipping whitespace and
/// parenthesised comments
struct Words<'a> {
    rest: &'a str,
}

impl<'a> Words<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_blank(&mut self) {
        loop {
            self.rest = self.rest.trim_start();
            match self.rest.strip_prefix('(') {
                Some(after) => {
                    self.rest = match after.find(')') {
                        Some(idx) => &after[idx + 1..],
                        None => "",
                    };
                }
                None => break,
            }
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Result<(char, &'a str), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blank();

        let mut chars = self.rest.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_alphabetic() {
            // Stop iterating; the rest of the line is not trustworthy
            self.rest = "";
            return Some(Err(ParseError::MissingCode));
        }

        let after = chars.as_str();
        let end = after
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(after.len());
        let (digits, rest) = after.split_at(end);
        self.rest = rest;

        Some(Ok((letter.to_ascii_uppercase(), digits)))
    }
}
