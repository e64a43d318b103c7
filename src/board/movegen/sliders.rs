use super::super::{Board, Coord};

/// Type of sliding piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn slider_can_reach(&self, from: Coord, to: Coord, slider: SliderType) -> bool {
        match slider {
            SliderType::Bishop => self.diagonal_path_clear(from, to),
            SliderType::Rook => self.straight_path_clear(from, to),
            SliderType::Queen => {
                self.diagonal_path_clear(from, to) || self.straight_path_clear(from, to)
            }
        }
    }

    fn diagonal_path_clear(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta(to);
        dx != 0 && dx.abs() == dy.abs() && self.path_clear(from, to)
    }

    fn straight_path_clear(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta(to);
        (dx == 0) != (dy == 0) && self.path_clear(from, to)
    }

    /// Walk from `to` back toward `from`, both excluded, and report whether
    /// every square passed is vacant. `from` and `to` must share a row,
    /// column or diagonal.
    fn path_clear(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = to.delta(from);
        let (step_x, step_y) = (dx.signum(), dy.signum());

        let mut current = to;
        loop {
            current = match current.offset(step_x, step_y) {
                Some(next) => next,
                None => return false,
            };
            if current == from {
                return true;
            }
            if !self.kind_on(current).is_vacant() {
                return false;
            }
        }
    }
}
