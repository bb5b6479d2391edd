//! Route finding for grid dungeons.
//!
//! This crate finds the walk a dungeon-crawler should take from its entry to
//! its exit, detouring through one chest whenever that is possible:
//!
//! - **Step enumeration** over 4-connected grids ([`Neighbors`], [`DungeonSteps`])
//! - **Shared-prefix path chains** stored in a [`ChainArena`]
//! - **Multi-target BFS** yielding shortest chains lazily ([`find_paths`])
//! - **Two-sided route selection** ([`RouteFinder`], [`find_shortest_path`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`Dungeon`] | route selection (adapted to [`Pather`] by [`DungeonSteps`]) |

mod bfs;
mod chain;
mod neighbors;
mod route;
mod traits;

#[cfg(test)]
mod test_grid;

pub use bfs::{ChainSearch, find_paths};
pub use chain::{Chain, ChainArena, ChainWalk, moves_along};
pub use neighbors::{CARDINAL, DungeonSteps, Neighbors, valid_steps};
pub use route::{
    Route, RouteConfig, RouteFinder, TwoPartRoute, find_shortest_path, merge_tracks, shortest,
};
pub use traits::{CellState, Dungeon, Pather};
