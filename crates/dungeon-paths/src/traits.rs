use dungeon_core::Point;

/// Source of the points reachable in one step from a given point.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf)
    }
}

/// Whether a map cell may be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Traversable,
    Blocked,
}

/// A dungeon map as seen by the route finder.
///
/// Implementors guarantee that [`cell_state`](Self::cell_state) is only
/// meaningful for points where [`in_bounds`](Self::in_bounds) holds; the
/// route finder never asks about other points.
pub trait Dungeon {
    fn in_bounds(&self, p: Point) -> bool;

    fn cell_state(&self, p: Point) -> CellState;

    /// Where the walker starts.
    fn entry(&self) -> Point;

    /// Where the walker must end.
    fn exit(&self) -> Point;

    /// Optional waypoints. Duplicates are ignored.
    fn chests(&self) -> &[Point];

    /// Convenience: in bounds and traversable.
    #[inline]
    fn is_traversable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cell_state(p) == CellState::Traversable
    }
}
