//! Dungeon maps for the route finder: cell storage, entry, exit, chests and
//! an ASCII text format.

pub mod map;
pub mod text;

pub use map::{Map, MapCell};
pub use text::MapError;
