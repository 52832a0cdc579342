//! Rectangular rooms and their door registry.
//!
//! A room's geometry is fixed once built: the tile buffer is filled at
//! construction and only the door list grows afterwards.

use serde::{Deserialize, Serialize};

use super::painter::MapPainter;
use super::tile::TileKind;
use crate::rng::MapRng;

/// Which side of a room a door's exterior tile lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorSide {
    Left,
    Right,
    Above,
    Below,
}

/// Axis-aligned rectangular room: an interior tile buffer plus doors
/// recorded one tile outside the perimeter, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of the interior's left column
    pub x: i32,
    /// Y coordinate of the interior's top row
    pub y: i32,
    /// Interior width
    pub width: i32,
    /// Interior height
    pub height: i32,
    tiles: Vec<TileKind>,
    doors: Vec<(i32, i32)>,
}

impl Room {
    /// Create a room with every interior tile set to floor
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        assert!(width >= 1 && height >= 1, "degenerate room {width}x{height}");
        Self {
            x,
            y,
            width,
            height,
            tiles: vec![TileKind::Floor; (width * height) as usize],
            doors: Vec::new(),
        }
    }

    /// Tile at room-local (x, y)
    ///
    /// Out-of-range input is a caller bug, not a recoverable failure.
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "local ({x}, {y}) outside a {}x{} room",
            self.width,
            self.height
        );
        self.tiles[(y * self.width + x) as usize]
    }

    /// Interior cell count
    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Number of exterior boundary cells
    pub fn perimeter_len(&self) -> i32 {
        2 * self.width + 2 * self.height
    }

    /// Check if a grid-absolute coordinate falls inside the interior
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Grid-absolute coordinate one tile outside a uniformly chosen
    /// point on the room's perimeter.
    ///
    /// The perimeter is flattened to a single ordinal in
    /// `[0, 2*width + 2*height)`: top edge, bottom edge, right edge,
    /// left edge, in that order. Mapping the ordinal straight to an
    /// exterior cell keeps the choice uniform over boundary cells
    /// without materializing them as a list.
    pub fn random_exit_position(&self, rng: &mut MapRng) -> (i32, i32) {
        self.exit_position(rng.upto(self.perimeter_len()))
    }

    fn exit_position(&self, ordinal: i32) -> (i32, i32) {
        if ordinal < self.width {
            // above the top row
            (self.x + ordinal, self.y - 1)
        } else if ordinal < self.width * 2 {
            // below the bottom row
            (self.x + ordinal - self.width, self.y + self.height)
        } else if ordinal < self.width * 2 + self.height {
            // right of the last column
            (self.x + self.width, self.y + ordinal - 2 * self.width)
        } else {
            // left of the first column
            (self.x - 1, self.y + ordinal - 2 * self.width - self.height)
        }
    }

    /// Record a door at a grid-absolute position one tile outside the
    /// perimeter. Duplicates are kept: appending the same position
    /// twice yields two door records, each of them drawn.
    pub fn add_door(&mut self, position: (i32, i32)) {
        self.doors.push(position);
    }

    /// Doors in insertion order
    pub fn doors(&self) -> &[(i32, i32)] {
        &self.doors
    }

    /// Classify which edge a door sits against.
    ///
    /// Panics if the position is not exactly one tile outside one of
    /// the four edges; such a door can only come from corrupted
    /// generation state.
    pub fn door_side(&self, door: (i32, i32)) -> DoorSide {
        let (dx, dy) = door;
        let in_rows = dy >= self.y && dy < self.y + self.height;
        let in_cols = dx >= self.x && dx < self.x + self.width;

        if dx == self.x - 1 && in_rows {
            DoorSide::Left
        } else if dx == self.x + self.width && in_rows {
            DoorSide::Right
        } else if dy == self.y - 1 && in_cols {
            DoorSide::Above
        } else if dy == self.y + self.height && in_cols {
            DoorSide::Below
        } else {
            panic!(
                "invalid door ({dx}, {dy}) for room at ({}, {}) size {}x{}",
                self.x, self.y, self.width, self.height
            );
        }
    }

    /// Emit the room to a painter: every tile, a wall segment for each
    /// edge-touching cell side, then one door segment per door record,
    /// drawn from the exterior tile toward the interior.
    pub fn draw<P: MapPainter>(&self, painter: &mut P) {
        for x in 0..self.width {
            for y in 0..self.height {
                let ax = self.x + x;
                let ay = self.y + y;
                painter.draw_tile(ax, ay, self.tile_at(x, y));

                if x == 0 {
                    painter.draw_wall(ax, ay, ax - 1, ay);
                }
                if y == 0 {
                    painter.draw_wall(ax, ay, ax, ay - 1);
                }
                if x == self.width - 1 {
                    painter.draw_wall(ax, ay, ax + 1, ay);
                }
                if y == self.height - 1 {
                    painter.draw_wall(ax, ay, ax, ay + 1);
                }
            }
        }

        for &(dx, dy) in &self.doors {
            match self.door_side((dx, dy)) {
                DoorSide::Left => painter.draw_door(dx, dy, dx + 1, dy),
                DoorSide::Right => painter.draw_door(dx, dy, dx - 1, dy),
                DoorSide::Above => painter.draw_door(dx, dy, dx, dy + 1),
                DoorSide::Below => painter.draw_door(dx, dy, dx, dy - 1),
            }
        }
    }
}
