//! A dungeon map: a grid of [`MapCell`]s with an entry, an exit and chests.

use std::fmt;

use dungeon_core::{Point, Range};
use dungeon_paths::{CellState, Dungeon};

/// Terrain of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapCell {
    #[default]
    Empty,
    Wall,
}

impl MapCell {
    /// How the route finder sees this cell.
    pub const fn state(self) -> CellState {
        match self {
            MapCell::Empty => CellState::Traversable,
            MapCell::Wall => CellState::Blocked,
        }
    }
}

/// A rectangular dungeon map.
///
/// Entry, exit and chests are positions on the map; they are expected to
/// lie on empty cells but the map does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    cells: Vec<MapCell>,
    bounds: Range,
    initial_position: Point,
    exit: Point,
    chests: Vec<Point>,
}

impl Map {
    /// Create a new map filled with [`MapCell::Empty`]. Entry and exit both
    /// start at (0, 0).
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![MapCell::default(); bounds.len()],
            bounds,
            initial_position: Point::ZERO,
            exit: Point::ZERO,
            chests: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<MapCell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: MapCell) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: MapCell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    pub fn set_initial_position(&mut self, p: Point) {
        self.initial_position = p;
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn set_exit(&mut self, p: Point) {
        self.exit = p;
    }

    /// Chest positions, in insertion order.
    pub fn chests(&self) -> &[Point] {
        &self.chests
    }

    /// Add a chest. Returns `false` if there already was one at `p`.
    pub fn add_chest(&mut self, p: Point) -> bool {
        if self.chests.contains(&p) {
            return false;
        }
        self.chests.push(p);
        true
    }

    /// Iterate over `(Point, MapCell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, MapCell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Text form of the map (see [`Map::from_text`]), with every point of
    /// `overlay` that falls on plain floor drawn as `*`.
    pub fn render(&self, overlay: &[Point]) -> String {
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for (p, cell) in self.iter() {
            if p.x == self.bounds.min.x && p.y > self.bounds.min.y {
                out.push('\n');
            }
            let ch = if p == self.initial_position {
                'P'
            } else if p == self.exit {
                'E'
            } else if self.chests.contains(&p) {
                'C'
            } else if cell == MapCell::Wall {
                '#'
            } else if overlay.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

impl Dungeon for Map {
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn cell_state(&self, p: Point) -> CellState {
        self.at(p).unwrap_or(MapCell::Wall).state()
    }

    fn entry(&self) -> Point {
        self.initial_position
    }

    fn exit(&self) -> Point {
        self.exit
    }

    fn chests(&self) -> &[Point] {
        &self.chests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let m = Map::new(10, 5);
        assert_eq!(m.size(), Point::new(10, 5));
        assert_eq!(m.width(), 10);
        assert_eq!(m.height(), 5);
        assert_eq!(m.count(MapCell::Empty), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut m = Map::new(4, 4);
        let p = Point::new(2, 3);
        m.set(p, MapCell::Wall);
        assert_eq!(m.at(p), Some(MapCell::Wall));
        assert_eq!(m.at(Point::new(0, 0)), Some(MapCell::Empty));
        assert_eq!(m.at(Point::new(10, 10)), None);
        m.set(Point::new(-1, 0), MapCell::Wall); // ignored
        assert_eq!(m.count(MapCell::Wall), 1);
    }

    #[test]
    fn test_count() {
        let mut m = Map::new(5, 5);
        for p in m.bounds() {
            m.set(p, MapCell::Wall);
        }
        assert_eq!(m.count(MapCell::Wall), 25);
        m.set(Point::new(0, 0), MapCell::Empty);
        assert_eq!(m.count(MapCell::Wall), 24);
        assert_eq!(m.count(MapCell::Empty), 1);
    }

    #[test]
    fn test_chests_dedup() {
        let mut m = Map::new(3, 3);
        assert!(m.add_chest(Point::new(1, 1)));
        assert!(!m.add_chest(Point::new(1, 1)));
        assert!(m.add_chest(Point::new(2, 1)));
        assert_eq!(m.chests(), &[Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn test_dungeon_view() {
        let mut m = Map::new(3, 2);
        m.set(Point::new(1, 0), MapCell::Wall);
        m.set_initial_position(Point::new(0, 1));
        m.set_exit(Point::new(2, 1));
        assert!(m.in_bounds(Point::new(2, 1)));
        assert!(!m.in_bounds(Point::new(3, 1)));
        assert_eq!(m.cell_state(Point::new(1, 0)), CellState::Blocked);
        assert_eq!(m.cell_state(Point::new(1, 1)), CellState::Traversable);
        assert_eq!(Dungeon::entry(&m), Point::new(0, 1));
        assert_eq!(Dungeon::exit(&m), Point::new(2, 1));
    }

    #[test]
    fn test_render_with_overlay() {
        let mut m = Map::new(3, 2);
        m.set(Point::new(1, 0), MapCell::Wall);
        m.set_initial_position(Point::new(0, 0));
        m.set_exit(Point::new(2, 0));
        m.add_chest(Point::new(2, 1));
        assert_eq!(m.to_string(), "P#E\n..C");
        let overlay = [Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)];
        assert_eq!(m.render(&overlay), "P#E\n**C");
    }
}
