//! Chest-aware route selection.
//!
//! A route is searched from both ends: once from the entry (towards every
//! chest and the exit) and once from the exit (towards every chest). Chains
//! from both sides that end on the same chest join into a [`TwoPartRoute`];
//! the shortest of those wins. Without any joinable chest the direct
//! entry→exit chain is used, and without that there is no route at all.

use dungeon_core::{Move, Point};

use crate::bfs::find_paths;
use crate::chain::{Chain, ChainArena, moves_along};
use crate::neighbors::DungeonSteps;
use crate::traits::Dungeon;

/// Options for [`RouteFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteConfig {
    /// End each search once all its targets are found rather than
    /// exhausting the reachable area. Does not change the result.
    pub stop_early: bool,
}

/// Two chains meeting at the same chest: entry→chest and exit→chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoPartRoute {
    pub from_entry: Chain,
    pub from_exit: Chain,
    pub chest: Point,
    len: usize,
}

impl TwoPartRoute {
    /// Join two chains ending on the same point. Returns `None` if their
    /// terminal points differ.
    pub fn new(arena: &ChainArena, from_entry: Chain, from_exit: Chain) -> Option<Self> {
        let chest = arena.point(from_entry);
        if chest != arena.point(from_exit) {
            return None;
        }
        Some(Self {
            from_entry,
            from_exit,
            chest,
            len: arena.length(from_entry) + arena.length(from_exit) - 1,
        })
    }

    /// Number of points on the whole route; the chest is counted once.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Points from entry through the chest to the exit.
    pub fn points(&self, arena: &ChainArena) -> Vec<Point> {
        let mut pts = arena.points(self.from_entry);
        pts.extend(arena.walk(self.from_exit).skip(1));
        pts
    }
}

/// Join start-side and exit-side chains on their terminal point.
///
/// Output order: start-side chains in the given order, each paired with
/// matching exit-side chains in their given order.
pub fn merge_tracks(
    arena: &ChainArena,
    from_entry: &[Chain],
    from_exit: &[Chain],
) -> Vec<TwoPartRoute> {
    from_entry
        .iter()
        .flat_map(|&a| {
            from_exit
                .iter()
                .filter_map(move |&b| TwoPartRoute::new(arena, a, b))
        })
        .collect()
}

/// The shortest route; among equally short routes the first one wins.
pub fn shortest(routes: &[TwoPartRoute]) -> Option<&TwoPartRoute> {
    routes.iter().min_by_key(|r| r.len())
}

/// Outcome of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    /// Entry → chest → exit.
    ViaChest { chest: Point, points: Vec<Point> },
    /// Entry → exit, no chest on the way.
    Direct { points: Vec<Point> },
    /// The exit cannot be reached from the entry.
    Unreachable,
}

impl Route {
    /// Points walked, entry first. Empty if unreachable.
    pub fn points(&self) -> &[Point] {
        match self {
            Route::ViaChest { points, .. } | Route::Direct { points } => points,
            Route::Unreachable => &[],
        }
    }

    /// Moves walked, in order. Empty if unreachable.
    pub fn moves(&self) -> Vec<Move> {
        moves_along(self.points())
    }

    pub fn move_count(&self) -> usize {
        self.points().len().saturating_sub(1)
    }

    /// The chest visited on the way, if any.
    pub fn chest(&self) -> Option<Point> {
        match self {
            Route::ViaChest { chest, .. } => Some(*chest),
            _ => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, Route::Unreachable)
    }
}

/// Reusable route finder.
///
/// Owns the chain arena shared by both searches, so repeated queries reuse
/// its allocation.
#[derive(Debug, Clone, Default)]
pub struct RouteFinder {
    config: RouteConfig,
    arena: ChainArena,
}

impl RouteFinder {
    pub fn new(config: RouteConfig) -> Self {
        Self {
            config,
            arena: ChainArena::new(),
        }
    }

    /// Find the shortest entry→exit route, going through a chest whenever
    /// some chest is reachable from both ends, even if that is longer than
    /// the direct route.
    ///
    /// A search never reports its own origin, so an exit placed on the
    /// entry is [`Route::Unreachable`].
    pub fn find_route<D: Dungeon + ?Sized>(&mut self, dungeon: &D) -> Route {
        self.arena.clear();
        let entry = dungeon.entry();
        let exit = dungeon.exit();

        let mut targets = dungeon.chests().to_vec();
        targets.push(exit);
        let from_start: Vec<Chain> =
            find_paths(&mut self.arena, DungeonSteps::new(dungeon), entry, &targets)
                .stop_when_all_found(self.config.stop_early)
                .collect();

        let mut track_to_exit = None;
        let mut tracks_to_chests = Vec::with_capacity(from_start.len());
        for c in from_start {
            if self.arena.point(c) == exit {
                track_to_exit = Some(c);
            } else {
                tracks_to_chests.push(c);
            }
        }
        let Some(track_to_exit) = track_to_exit else {
            log::debug!("no route from {entry} to {exit}");
            return Route::Unreachable;
        };

        let tracks_from_exit: Vec<Chain> = find_paths(
            &mut self.arena,
            DungeonSteps::new(dungeon),
            exit,
            dungeon.chests(),
        )
        .stop_when_all_found(self.config.stop_early)
        .collect();

        let merged = merge_tracks(&self.arena, &tracks_to_chests, &tracks_from_exit);
        match shortest(&merged) {
            Some(best) => {
                log::debug!(
                    "route {entry} -> {} -> {exit}: {} moves ({} candidates)",
                    best.chest,
                    best.len() - 1,
                    merged.len()
                );
                Route::ViaChest {
                    chest: best.chest,
                    points: best.points(&self.arena),
                }
            }
            None => {
                log::debug!(
                    "route {entry} -> {exit}: {} moves, no chest reachable",
                    self.arena.length(track_to_exit) - 1
                );
                Route::Direct {
                    points: self.arena.points(track_to_exit),
                }
            }
        }
    }
}

/// Moves of the best entry→exit route of `dungeon`, visiting a chest when
/// possible. Empty if the exit is unreachable.
pub fn find_shortest_path<D: Dungeon + ?Sized>(dungeon: &D) -> Vec<Move> {
    RouteFinder::default().find_route(dungeon).moves()
}
