//! Shared-prefix path chains.
//!
//! A chain is a path from a search origin to some point, stored tail-first:
//! every node records its point and the index of its predecessor. Sibling
//! paths discovered by the same search share their common prefix, so the
//! arena grows by exactly one node per visited cell.

use dungeon_core::{Move, Point};

/// Handle to a chain stored in a [`ChainArena`].
///
/// Handles are only meaningful for the arena that produced them, and only
/// until that arena is [cleared](ChainArena::clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chain(u32);

impl Chain {
    #[inline]
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct ChainNode {
    pos: Point,
    parent: Option<Chain>,
    len: usize,
}

/// Append-only storage for path chains.
#[derive(Debug, Clone, Default)]
pub struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena able to hold `n` nodes without reallocating.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Drop every chain, invalidating all handles but keeping capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Total number of nodes across all chains.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Start a new chain of length 1 at `pos`.
    pub fn origin(&mut self, pos: Point) -> Chain {
        self.push(ChainNode {
            pos,
            parent: None,
            len: 1,
        })
    }

    /// Extend `parent` by one step to `pos`. `parent` is left untouched and
    /// can be extended again.
    pub fn extend(&mut self, parent: Chain, pos: Point) -> Chain {
        let len = self.node(parent).len + 1;
        self.push(ChainNode {
            pos,
            parent: Some(parent),
            len,
        })
    }

    /// The chain's terminal point.
    #[inline]
    pub fn point(&self, chain: Chain) -> Point {
        self.node(chain).pos
    }

    /// Number of points in the chain (the origin counts as 1).
    #[inline]
    pub fn length(&self, chain: Chain) -> usize {
        self.node(chain).len
    }

    /// The chain without its terminal point, or `None` for an origin.
    #[inline]
    pub fn parent(&self, chain: Chain) -> Option<Chain> {
        self.node(chain).parent
    }

    /// Walk the chain from its terminal point back to its origin.
    pub fn walk(&self, chain: Chain) -> ChainWalk<'_> {
        ChainWalk {
            arena: self,
            next: Some(chain),
        }
    }

    /// Points of the chain in forward order, origin first.
    pub fn points(&self, chain: Chain) -> Vec<Point> {
        let mut pts: Vec<Point> = self.walk(chain).collect();
        pts.reverse();
        pts
    }

    /// Moves walking the chain forward, from origin to terminal point.
    pub fn moves(&self, chain: Chain) -> Vec<Move> {
        moves_along(&self.points(chain))
    }

    #[inline]
    fn node(&self, chain: Chain) -> &ChainNode {
        &self.nodes[chain.idx()]
    }

    fn push(&mut self, node: ChainNode) -> Chain {
        let id = Chain(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

/// Backward iterator over a chain's points; see [`ChainArena::walk`].
#[derive(Debug, Clone)]
pub struct ChainWalk<'a> {
    arena: &'a ChainArena,
    next: Option<Chain>,
}

impl Iterator for ChainWalk<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let cur = self.next?;
        let node = self.arena.node(cur);
        self.next = node.parent;
        Some(node.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.map_or(0, |c| self.arena.length(c));
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChainWalk<'_> {}

/// Convert consecutive adjacent points into moves.
///
/// `points` must come from a chain (consecutive points orthogonally
/// adjacent); a pair that is not adjacent has no move and is skipped.
pub fn moves_along(points: &[Point]) -> Vec<Move> {
    points
        .windows(2)
        .filter_map(|w| {
            let m = Move::between(w[0], w[1]);
            debug_assert!(m.is_some(), "non-adjacent step {} -> {}", w[0], w[1]);
            m
        })
        .collect()
}
