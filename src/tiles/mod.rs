//! Tiles: edge labels, path geometry and the fixed tile set.

pub mod catalog;
pub mod notch;
pub mod tile;

pub use catalog::{TILE_COUNT, TILE_SET};
pub use notch::{Direction, Notch, Path};
pub use tile::Tile;
