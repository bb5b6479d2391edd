//! Step enumeration on a 4-connected grid.

use dungeon_core::Point;

use crate::traits::{Dungeon, Pather};

/// Unit offsets in enumeration order: west, north, east, south.
pub const CARDINAL: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a grid point, filtered by a
/// predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `p` (west, north, east,
    /// south), keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        push_cardinal(p, keep, &mut self.buf);
        &self.buf
    }
}

fn push_cardinal(p: Point, keep: impl Fn(Point) -> bool, buf: &mut Vec<Point>) {
    for d in CARDINAL {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

/// [`Pather`] over a [`Dungeon`]: a step is valid when it stays in bounds
/// and lands on a traversable cell.
pub struct DungeonSteps<'a, D: ?Sized> {
    dungeon: &'a D,
}

impl<'a, D: Dungeon + ?Sized> DungeonSteps<'a, D> {
    pub fn new(dungeon: &'a D) -> Self {
        Self { dungeon }
    }
}

impl<D: Dungeon + ?Sized> Pather for DungeonSteps<'_, D> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_cardinal(p, |n| self.dungeon.is_traversable(n), buf);
    }
}

/// Valid steps from `p`, in west, north, east, south order.
pub fn valid_steps<D: Dungeon + ?Sized>(dungeon: &D, p: Point) -> Vec<Point> {
    let mut nb = Neighbors::new();
    nb.cardinal(p, |n| dungeon.is_traversable(n)).to_vec()
}
