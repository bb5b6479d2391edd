//! Orthogonal move directions and their unit offsets.

use std::fmt;

use crate::geom::Point;

/// One of the four orthogonal steps a walker can take.
///
/// Offsets follow screen coordinates: `Up` decreases `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four moves, in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Convert a unit offset into a move.
    ///
    /// Only the four offsets (±1, 0) and (0, ±1) map to a move; anything
    /// else returns `None`.
    pub const fn from_offset(offset: Point) -> Option<Move> {
        match (offset.x, offset.y) {
            (0, -1) => Some(Move::Up),
            (0, 1) => Some(Move::Down),
            (-1, 0) => Some(Move::Left),
            (1, 0) => Some(Move::Right),
            _ => None,
        }
    }

    /// The unit offset this move applies.
    pub const fn offset(self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
        }
    }

    /// Move between two adjacent points, or `None` if they are not adjacent.
    #[inline]
    pub fn between(from: Point, to: Point) -> Option<Move> {
        Self::from_offset(to - from)
    }

    /// Single-letter form: `U`, `D`, `L` or `R`.
    pub const fn letter(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_invert() {
        for m in Move::ALL {
            assert_eq!(Move::from_offset(m.offset()), Some(m));
        }
    }

    #[test]
    fn screen_coordinates() {
        assert_eq!(Move::from_offset(Point::new(0, -1)), Some(Move::Up));
        assert_eq!(Move::from_offset(Point::new(1, 0)), Some(Move::Right));
        assert_eq!(
            Move::between(Point::new(2, 2), Point::new(2, 3)),
            Some(Move::Down)
        );
    }

    #[test]
    fn non_unit_offsets_rejected() {
        assert_eq!(Move::from_offset(Point::ZERO), None);
        assert_eq!(Move::from_offset(Point::new(1, 1)), None);
        assert_eq!(Move::from_offset(Point::new(2, 0)), None);
    }

    #[test]
    fn letters() {
        let s: String = Move::ALL.iter().map(|m| m.letter()).collect();
        assert_eq!(s, "UDLR");
        assert_eq!(Move::Left.to_string(), "left");
    }
}
