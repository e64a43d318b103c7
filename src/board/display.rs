//! Text rendering of the board.

use std::fmt;

use super::{Board, BOARD_SIZE};

const RULE: &str = "+---+---+---+---+---+---+---+---+";

impl Board {
    /// Render the board as a grid, top row first, optionally with rank and
    /// file labels.
    #[must_use]
    pub fn render(&self, coordinates: bool) -> String {
        let margin = if coordinates { "  " } else { "" };
        let mut out = String::new();

        out.push_str(margin);
        out.push_str(RULE);
        out.push('\n');
        for (y, row) in self.squares.chunks(BOARD_SIZE).enumerate() {
            if coordinates {
                out.push_str(&format!("{} ", BOARD_SIZE - y));
            }
            out.push('|');
            for square in row {
                out.push_str(&format!(" {} |", square.kind().to_char()));
            }
            out.push('\n');
            out.push_str(margin);
            out.push_str(RULE);
            out.push('\n');
        }
        if coordinates {
            out.push_str("    a   b   c   d   e   f   g   h\n");
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[1], "| R | N | B | Q | K | B | N | R |");
        assert_eq!(lines[5], "| . | . | . | . | . | . | . | . |");
        assert_eq!(lines[15], "| R | N | B | Q | K | B | N | R |");
    }

    #[test]
    fn test_render_with_coordinates() {
        let text = Board::new().render(true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert!(lines[1].starts_with("8 |"));
        assert!(lines[15].starts_with("1 |"));
        assert_eq!(lines[17].trim(), "a   b   c   d   e   f   g   h");
    }
}
