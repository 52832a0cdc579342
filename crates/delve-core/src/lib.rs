//! delve-core: procedural 2-D dungeon layout generation.
//!
//! Grows a grid-aligned map of non-overlapping rectangular rooms
//! connected by single-tile doors, outward from a seed room placed at
//! a random position. The crate produces the finished layout only;
//! turning tiles and boundaries into pixels is the consumer's job,
//! fed through the narrow [`map::MapPainter`] seam.
//!
//! Generation is deterministic for a given seed: every entry point
//! borrows a [`MapRng`] rather than reaching for a global source.

pub mod map;

mod consts;
mod rng;

pub use consts::*;
pub use rng::MapRng;
