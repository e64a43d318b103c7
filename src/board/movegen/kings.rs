use super::super::Coord;

/// One step in any of the eight directions.
pub(crate) fn king_can_reach(from: Coord, to: Coord) -> bool {
    let (dx, dy) = from.delta(to);
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
}
