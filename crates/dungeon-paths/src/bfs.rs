use std::collections::{HashSet, VecDeque};

use dungeon_core::Point;

use crate::chain::{Chain, ChainArena};
use crate::traits::Pather;

/// Breadth-first search from one origin towards a set of targets.
///
/// Returns a lazy iterator yielding, for every reachable target, a shortest
/// chain from `origin` to it. Chains come out in discovery order, so their
/// lengths never decrease. Each target is yielded at most once; duplicated
/// targets are ignored and the origin itself is never yielded.
///
/// New chain nodes are stored in `arena`, which stays borrowed while the
/// iterator lives; yielded handles remain valid in it afterwards.
pub fn find_paths<'a, P: Pather>(
    arena: &'a mut ChainArena,
    pather: P,
    origin: Point,
    targets: &[Point],
) -> ChainSearch<'a, P> {
    let mut targets: HashSet<Point> = targets.iter().copied().collect();
    targets.remove(&origin);
    let remaining = targets.len();

    let mut visited = HashSet::new();
    visited.insert(origin);
    let mut frontier = VecDeque::new();
    frontier.push_back(arena.origin(origin));

    ChainSearch {
        arena,
        pather,
        origin,
        targets,
        remaining,
        visited,
        frontier,
        found: VecDeque::new(),
        nbuf: Vec::with_capacity(4),
        stop_early: false,
        done: false,
    }
}

/// Iterator returned by [`find_paths`].
pub struct ChainSearch<'a, P> {
    arena: &'a mut ChainArena,
    pather: P,
    origin: Point,
    targets: HashSet<Point>,
    remaining: usize,
    visited: HashSet<Point>,
    frontier: VecDeque<Chain>,
    // Targets discovered by the last expansion but not yielded yet.
    found: VecDeque<Chain>,
    nbuf: Vec<Point>,
    stop_early: bool,
    done: bool,
}

impl<P: Pather> ChainSearch<'_, P> {
    /// Stop exploring as soon as every target has been yielded, instead of
    /// exhausting the reachable area.
    pub fn stop_when_all_found(mut self, yes: bool) -> Self {
        self.stop_early = yes;
        self
    }

    /// Number of points marked visited so far, origin included.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Targets not yielded yet.
    pub fn remaining_targets(&self) -> usize {
        self.remaining
    }

    /// Read access to the arena holding the yielded chains.
    pub fn arena(&self) -> &ChainArena {
        &*self.arena
    }

    fn expand(&mut self, from: Chain) {
        let pos = self.arena.point(from);
        self.nbuf.clear();
        self.pather.neighbors(pos, &mut self.nbuf);

        for &step in self.nbuf.iter() {
            if !self.visited.insert(step) {
                continue;
            }
            let tail = self.arena.extend(from, step);
            self.frontier.push_back(tail);
            if self.targets.contains(&step) {
                self.remaining -= 1;
                log::trace!(
                    "bfs from {}: reached {} in {} steps",
                    self.origin,
                    step,
                    self.arena.length(tail) - 1
                );
                self.found.push_back(tail);
            }
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            log::debug!(
                "bfs from {}: visited {} cells, found {}/{} targets",
                self.origin,
                self.visited.len(),
                self.targets.len() - self.remaining,
                self.targets.len()
            );
        }
    }
}

impl<P: Pather> Iterator for ChainSearch<'_, P> {
    type Item = Chain;

    fn next(&mut self) -> Option<Chain> {
        loop {
            if let Some(c) = self.found.pop_front() {
                return Some(c);
            }
            if self.stop_early && self.remaining == 0 {
                self.finish();
                return None;
            }
            let Some(from) = self.frontier.pop_front() else {
                self.finish();
                return None;
            };
            self.expand(from);
        }
    }
}
