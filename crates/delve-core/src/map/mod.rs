//! Map assembly
//!
//! Contains the tile enumeration, rooms with their door registry, the
//! occupancy grid, the growth algorithm, and the painter seam toward
//! the external renderer.

mod errors;
mod generation;
mod grid;
mod painter;
mod room;
mod tile;

pub use errors::GenerationError;
pub use generation::{GenOptions, generate_map, generate_map_with};
pub use grid::Grid;
pub use painter::MapPainter;
pub use room::{DoorSide, Room};
pub use tile::TileKind;
