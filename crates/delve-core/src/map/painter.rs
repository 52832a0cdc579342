//! Drawing seam toward the external renderer.

use super::tile::TileKind;

/// Receives draw calls for a finished map.
///
/// Implemented by the rendering collaborator; the core never decides
/// pixels. Boundary calls name two adjacent cells: exactly one of the
/// two coordinate pairs differs by 1, the other is equal.
pub trait MapPainter {
    /// Draw the tile occupying the cell at (x, y)
    fn draw_tile(&mut self, x: i32, y: i32, kind: TileKind);

    /// Draw a wall on the boundary between two adjacent cells
    fn draw_wall(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Draw a door on the boundary between two adjacent cells
    fn draw_door(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}
