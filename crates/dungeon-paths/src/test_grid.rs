//! Small text-built dungeons and brute-force distances for unit tests.

use std::collections::HashMap;

use dungeon_core::{Point, Range};
use rand::{RngExt, SeedableRng};

use crate::neighbors::CARDINAL;
use crate::traits::{CellState, Dungeon};

/// `#` wall, `.` floor, `P` entry, `E` exit, `C` chest.
pub struct TestGrid {
    pub bounds: Range,
    pub walls: Vec<bool>,
    pub entry: Point,
    pub exit: Point,
    pub chests: Vec<Point>,
}

impl TestGrid {
    pub fn parse(s: &str) -> Self {
        let lines: Vec<&str> = s.lines().collect();
        let w = lines[0].chars().count() as i32;
        let h = lines.len() as i32;
        let mut g = TestGrid {
            bounds: Range::new(0, 0, w, h),
            walls: vec![false; (w * h) as usize],
            entry: Point::ZERO,
            exit: Point::ZERO,
            chests: Vec::new(),
        };
        for (y, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count() as i32, w, "ragged test grid");
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => g.walls[(y as i32 * w + x as i32) as usize] = true,
                    'P' => g.entry = p,
                    'E' => g.exit = p,
                    'C' => g.chests.push(p),
                    '.' => {}
                    other => panic!("unexpected {other:?} in test grid"),
                }
            }
        }
        g
    }

    /// A random `w`×`h` grid with roughly `wall_pct`% walls and up to
    /// `n_chests` chests, entry and exit on distinct floor cells.
    pub fn random(seed: u64, w: i32, h: i32, wall_pct: u32, n_chests: usize) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bounds = Range::new(0, 0, w, h);
        let walls: Vec<bool> = (0..bounds.len())
            .map(|_| rng.random_range(0..100u32) < wall_pct)
            .collect();
        let mut g = TestGrid {
            bounds,
            walls,
            entry: Point::ZERO,
            exit: Point::new(w - 1, h - 1),
            chests: Vec::new(),
        };
        g.set_floor(g.entry);
        g.set_floor(g.exit);
        for _ in 0..n_chests {
            let p = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            if p != g.entry && p != g.exit {
                g.set_floor(p);
                g.chests.push(p);
            }
        }
        g
    }

    fn set_floor(&mut self, p: Point) {
        if let Some(i) = self.bounds.index(p) {
            self.walls[i] = false;
        }
    }
}

impl Dungeon for TestGrid {
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn cell_state(&self, p: Point) -> CellState {
        match self.bounds.index(p) {
            Some(i) if !self.walls[i] => CellState::Traversable,
            _ => CellState::Blocked,
        }
    }

    fn entry(&self) -> Point {
        self.entry
    }

    fn exit(&self) -> Point {
        self.exit
    }

    fn chests(&self) -> &[Point] {
        &self.chests
    }
}

/// Step distances from `from` to every reachable floor cell, computed by
/// relaxing every cell until nothing changes. Independent of the BFS code.
pub fn brute_distances(g: &TestGrid, from: Point) -> HashMap<Point, usize> {
    let mut dist = HashMap::new();
    dist.insert(from, 0usize);
    loop {
        let mut changed = false;
        for p in g.bounds.iter() {
            if !g.is_traversable(p) {
                continue;
            }
            let best = CARDINAL
                .iter()
                .filter_map(|&d| dist.get(&(p + d)).map(|&n| n + 1))
                .min();
            if let Some(b) = best {
                let cur = dist.get(&p).copied().unwrap_or(usize::MAX);
                if b < cur {
                    dist.insert(p, b);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}
