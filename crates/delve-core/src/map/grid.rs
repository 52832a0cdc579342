//! Occupancy grid: the finished map artifact.

use serde::{Deserialize, Serialize};

use super::painter::MapPainter;
use super::room::Room;
use super::tile::TileKind;

/// Width x height tile map plus the rooms inserted into it.
///
/// The room list keeps insertion order; it exists for iteration and
/// draw order, not spatial lookup. Collision checks run against the
/// tile buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Map width in tiles
    pub width: i32,
    /// Map height in tiles
    pub height: i32,
    tiles: Vec<TileKind>,
    rooms: Vec<Room>,
}

impl Grid {
    /// Create an empty grid; every tile starts unclaimed
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "degenerate grid {width}x{height}");
        Self {
            width,
            height,
            tiles: vec![TileKind::None; (width * height) as usize],
            rooms: Vec::new(),
        }
    }

    /// Tile at (x, y); any coordinate outside the allocated extent
    /// reads as `TileKind::None`
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return TileKind::None;
        }
        self.tiles[(y * self.width + x) as usize]
    }

    /// Check whether a width x height rectangle anchored at (x, y)
    /// leaves the grid or touches any claimed tile. The full footprint
    /// is checked: partial overlap is still a collision.
    pub fn collides(&self, width: i32, height: i32, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x + width > self.width || y + height > self.height {
            return true;
        }
        for i in x..x + width {
            for j in y..y + height {
                if self.tile_at(i, j).is_claimed() {
                    return true;
                }
            }
        }
        false
    }

    /// Copy a room's tiles into the grid and append it to the room
    /// list.
    ///
    /// The caller has already established the placement is
    /// collision-free; `insert` does not re-check.
    pub fn insert(&mut self, room: Room) {
        for ly in 0..room.height {
            for lx in 0..room.width {
                let idx = ((room.y + ly) * self.width + room.x + lx) as usize;
                self.tiles[idx] = room.tile_at(lx, ly);
            }
        }
        self.rooms.push(room);
    }

    /// Find an anchor for a width x height rectangle that covers the
    /// point (x, y).
    ///
    /// Offsets are swept in raster order (i outer over [0, width), j
    /// inner over [0, height)), testing anchor (x - i, y - j) and
    /// returning the first anchor that does not collide. First-found
    /// in this exact order, not nearest-fit: layouts reproduce only if
    /// the iteration order is preserved.
    pub fn find_fit(&self, x: i32, y: i32, width: i32, height: i32) -> Option<(i32, i32)> {
        for i in 0..width {
            for j in 0..height {
                if !self.collides(width, height, x - i, y - j) {
                    return Some((x - i, y - j));
                }
            }
        }
        None
    }

    /// Rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub(crate) fn room_mut(&mut self, index: usize) -> &mut Room {
        &mut self.rooms[index]
    }

    /// Number of floor tiles currently claimed
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == TileKind::Floor).count()
    }

    /// Emit the whole map to a painter, newest room first: a room's
    /// entry door is recorded on its parent, which draws later and
    /// overdraws the shared wall segment.
    pub fn draw<P: MapPainter>(&self, painter: &mut P) {
        for room in self.rooms.iter().rev() {
            room.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_at_out_of_range_is_none() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.tile_at(-1, 0), TileKind::None);
        assert_eq!(grid.tile_at(0, -1), TileKind::None);
        assert_eq!(grid.tile_at(4, 0), TileKind::None);
        assert_eq!(grid.tile_at(0, 4), TileKind::None);
    }

    #[test]
    fn test_collides_at_bounds() {
        let grid = Grid::new(8, 8);
        assert!(grid.collides(3, 3, -1, 0));
        assert!(grid.collides(3, 3, 0, -1));
        assert!(grid.collides(3, 3, 6, 0));
        assert!(grid.collides(3, 3, 0, 6));
        assert!(!grid.collides(3, 3, 5, 5));
        assert!(!grid.collides(8, 8, 0, 0));
    }

    #[test]
    fn test_collides_with_claimed_tiles() {
        let mut grid = Grid::new(8, 8);
        grid.insert(Room::new(2, 2, 3, 3));

        // overlaps the claimed block
        assert!(grid.collides(2, 2, 4, 4));
        // clears it to the right
        assert!(!grid.collides(2, 2, 5, 2));
    }

    #[test]
    fn test_insert_copies_room_tiles() {
        let mut grid = Grid::new(6, 6);
        grid.insert(Room::new(1, 2, 3, 2));

        assert_eq!(grid.rooms().len(), 1);
        assert_eq!(grid.floor_count(), 6);
        assert_eq!(grid.tile_at(1, 2), TileKind::Floor);
        assert_eq!(grid.tile_at(3, 3), TileKind::Floor);
        assert_eq!(grid.tile_at(4, 2), TileKind::None);
        assert_eq!(grid.tile_at(0, 0), TileKind::None);
    }

    #[test]
    fn test_find_fit_empty_grid_anchors_at_point() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.find_fit(4, 5, 3, 2), Some((4, 5)));
    }

    #[test]
    fn test_find_fit_sweeps_columns_before_rows() {
        let mut grid = Grid::new(10, 10);
        // (5, 6) is covered by the anchor (4, 5) footprint but not by
        // (4, 4) or (3, 5); only the i-outer/j-inner sweep picks (4, 4)
        grid.insert(Room::new(5, 6, 1, 1));
        assert_eq!(grid.find_fit(4, 5, 2, 2), Some((4, 4)));
    }

    #[test]
    fn test_find_fit_reports_no_anchor() {
        let mut grid = Grid::new(4, 4);
        grid.insert(Room::new(0, 0, 4, 4));
        assert_eq!(grid.find_fit(2, 2, 2, 2), None);

        // a 5-wide rectangle can never fit a 4-wide grid
        assert_eq!(Grid::new(4, 4).find_fit(0, 0, 5, 1), None);
    }

    #[test]
    fn test_draw_order_is_reverse_insertion() {
        struct FirstTile(Option<(i32, i32)>);
        impl MapPainter for FirstTile {
            fn draw_tile(&mut self, x: i32, y: i32, _kind: TileKind) {
                if self.0.is_none() {
                    self.0 = Some((x, y));
                }
            }
            fn draw_wall(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}
            fn draw_door(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}
        }

        let mut grid = Grid::new(10, 10);
        grid.insert(Room::new(0, 0, 2, 2));
        grid.insert(Room::new(7, 7, 2, 2));

        let mut painter = FirstTile(None);
        grid.draw(&mut painter);
        assert_eq!(painter.0, Some((7, 7)));
    }
}
