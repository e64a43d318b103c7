use super::super::Coord;

pub(crate) fn knight_can_reach(from: Coord, to: Coord) -> bool {
    let (dx, dy) = from.delta(to);
    matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
}
