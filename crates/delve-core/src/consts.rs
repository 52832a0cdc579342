//! Generation constants.

/// Room extent range: each dimension is drawn uniformly from this
/// inclusive range.
pub const MIN_ROOM_EXTENT: i32 = 2;
pub const MAX_ROOM_EXTENT: i32 = 6;

/// Placement attempts allowed per growth step before the run fails
pub const GROWTH_ATTEMPT_LIMIT: u32 = 1000;

/// Map glyphs
pub const S_NONE: char = ' ';
pub const S_FLOOR: char = '.';
pub const S_OBSTACLE: char = '#';
