//! Tile values stored in the occupancy grid.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_FLOOR, S_NONE, S_OBSTACLE};

/// One cell's worth of map content
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Unclaimed: no room covers this cell
    #[default]
    None = 0,
    /// Walkable room interior
    Floor = 1,
    /// Reserved for future content; generation never places it
    Obstacle = 2,
}

impl TileKind {
    /// Check if a cell holding this value belongs to some room
    pub const fn is_claimed(&self) -> bool {
        !matches!(self, TileKind::None)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::None => S_NONE,
            TileKind::Floor => S_FLOOR,
            TileKind::Obstacle => S_OBSTACLE,
        }
    }
}
