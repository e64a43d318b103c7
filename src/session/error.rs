//! Errors reported by the text session.

use std::fmt;

use crate::board::{LayoutError, SquareError};

/// Error type for session commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Bad square argument
    Square(SquareError),
    /// Bad layout argument
    Layout(LayoutError),
    /// Command needs an argument that was not given
    MissingArgument { command: &'static str },
    /// `setoption` named an option that does not exist
    UnknownOption { name: String },
    /// `setoption` value could not be parsed for the option
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Square(e) => write!(f, "{e}"),
            SessionError::Layout(e) => write!(f, "{e}"),
            SessionError::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
            SessionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            SessionError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Square(e) => Some(e),
            SessionError::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for SessionError {
    fn from(e: SquareError) -> Self {
        SessionError::Square(e)
    }
}

impl From<LayoutError> for SessionError {
    fn from(e: LayoutError) -> Self {
        SessionError::Layout(e)
    }
}
