//! Coordinates and index conversion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A position on the board as `(x, y)`.
///
/// `y = 0` is the top row as rendered, so index 0..7 lies on row 0 and
/// indices grow row-major towards the bottom right corner (index 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Coordinate of a board index.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..64`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SQUARES, "square index {index} out of range");
        let y = index / BOARD_SIZE;
        Coord {
            x: index - BOARD_SIZE * y,
            y,
        }
    }

    /// Column, 0 on the left.
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Row, 0 at the top.
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Row-major board index (0-63).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.y * BOARD_SIZE + self.x
    }

    /// Signed `(dx, dy)` from `self` to `other`.
    #[inline]
    #[must_use]
    pub const fn delta(self, other: Coord) -> (isize, isize) {
        (
            other.x as isize - self.x as isize,
            other.y as isize - self.y as isize,
        )
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Coord::new(x, y)
    }

    /// Parse either a plain index (`"52"`) or algebraic notation (`"e2"`).
    pub fn parse(s: &str) -> Result<Self, SquareError> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Coord::try_from(index);
        }
        s.parse()
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

/// Algebraic notation: files `a`-`h` left to right, rank 8 on the top row.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.x as u8 + b'a') as char,
            BOARD_SIZE - self.y
        )
    }
}

impl TryFrom<usize> for Coord {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index >= NUM_SQUARES {
            return Err(SquareError::IndexOutOfBounds { index });
        }
        Ok(Coord::from_index(index))
    }
}

impl FromStr for Coord {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let x = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match chars[1] {
            c @ '1'..='8' => BOARD_SIZE - (c as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Coord { x, y })
    }
}
