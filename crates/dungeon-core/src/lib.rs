//! Geometry and move types shared by the dungeon crates.
//!
//! This crate provides the foundational types used across the workspace:
//! integer map positions, rectangular bounds and the four orthogonal moves
//! a walker can make.

pub mod geom;
pub mod moves;

pub use geom::{Point, Range, RangeIter};
pub use moves::Move;
