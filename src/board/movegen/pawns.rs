use super::super::Coord;

/// Row a pawn must stand on to be allowed the two-square advance.
pub(crate) const PAWN_HOME_ROW: usize = 6;

/// Pawns only advance toward row 0, one square, or two from the home row.
///
/// The home row is the same for every pawn, and the two-square advance does
/// not look at the square it passes over.
pub(crate) fn pawn_can_reach(from: Coord, to: Coord) -> bool {
    if from.x() != to.x() {
        return false;
    }
    let advance = from.y() as isize - to.y() as isize;
    match advance {
        1 => true,
        2 => from.y() == PAWN_HOME_ROW,
        _ => false,
    }
}
