use crate::board::Coord;

use super::SessionError;

/// How squares are written in session output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Notation {
    /// `e2`
    #[default]
    Algebraic,
    /// `52`
    Index,
}

impl Notation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Notation::Algebraic => "algebraic",
            Notation::Index => "index",
        }
    }
}

/// Runtime settings of the text session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Draw rank and file labels around the board
    pub coordinates: bool,
    /// Square notation in reports
    pub notation: Notation,
    /// Draw the board after every activation
    pub echo_board: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionOptions {
    #[must_use]
    pub fn new() -> Self {
        SessionOptions {
            coordinates: true,
            notation: Notation::Algebraic,
            echo_board: false,
        }
    }

    /// One `option ...` line per setting, with its current value.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(
                "option name Coordinates type check default {}",
                self.coordinates
            ),
            format!(
                "option name Notation type combo default {} var algebraic var index",
                self.notation.name()
            ),
            format!(
                "option name Echo Board type check default {}",
                self.echo_board
            ),
        ]
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), SessionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let invalid = || SessionError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };

        match normalized.as_str() {
            "coordinates" => {
                self.coordinates = parse_check(value).ok_or_else(invalid)?;
            }
            "notation" => {
                self.notation = match value.map(str::to_ascii_lowercase).as_deref() {
                    Some("algebraic") => Notation::Algebraic,
                    Some("index") => Notation::Index,
                    _ => return Err(invalid()),
                };
            }
            "echo board" | "echoboard" => {
                self.echo_board = parse_check(value).ok_or_else(invalid)?;
            }
            _ => {
                return Err(SessionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Write a board index in the configured notation.
    #[must_use]
    pub fn format_square(&self, index: usize) -> String {
        match self.notation {
            Notation::Algebraic => Coord::from_index(index).to_string(),
            Notation::Index => index.to_string(),
        }
    }
}

/// A missing value means on, as for a bare flag.
fn parse_check(value: Option<&str>) -> Option<bool> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        None | Some("true" | "on" | "1") => Some(true),
        Some("false" | "off" | "0") => Some(false),
        _ => None,
    }
}
