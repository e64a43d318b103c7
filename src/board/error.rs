//! Error types for board operations.

use std::fmt;

/// Error type for square lookups and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index past the end of the board (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Neither an index nor algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Unknown glyph in a row
    InvalidGlyph { glyph: char },
    /// Layout does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row does not describe exactly 8 squares
    WrongRowLength { row: usize, length: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidGlyph { glyph } => {
                write!(f, "Invalid glyph '{glyph}' in layout")
            }
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::WrongRowLength { row, length } => {
                write!(f, "Row {row} describes {length} squares, expected 8")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
