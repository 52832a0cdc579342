//! Map generation: seed room plus bounded-retry growth.
//!
//! A run seeds the grid with one randomly placed room, then grows the
//! layout one room at a time: pick an existing room, pick an exit
//! point on its perimeter, and try to fit a freshly sized room over
//! that point. Every successful growth step records exactly one door
//! on the parent room.

use super::errors::GenerationError;
use super::grid::Grid;
use super::room::Room;
use crate::consts::{GROWTH_ATTEMPT_LIMIT, MAX_ROOM_EXTENT, MIN_ROOM_EXTENT};
use crate::rng::MapRng;

/// Tunable generation knobs
///
/// Defaults: room extents uniform in 2..=6, 1000 placement attempts
/// per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    /// Smallest room extent per dimension (inclusive)
    pub min_room_extent: i32,
    /// Largest room extent per dimension (inclusive)
    pub max_room_extent: i32,
    /// Placement attempts per step before the run fails
    pub attempt_limit: u32,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            min_room_extent: MIN_ROOM_EXTENT,
            max_room_extent: MAX_ROOM_EXTENT,
            attempt_limit: GROWTH_ATTEMPT_LIMIT,
        }
    }
}

/// Outcome of a bounded placement loop
enum Retry {
    Placed,
    Exhausted,
}

/// Run `attempt` until it reports success or the bound runs dry
fn with_retries(limit: u32, mut attempt: impl FnMut() -> bool) -> Retry {
    for _ in 0..limit {
        if attempt() {
            return Retry::Placed;
        }
    }
    Retry::Exhausted
}

/// Size a candidate room and anchor it so its footprint covers
/// `target`. Returns the room unplaced; the caller inserts it.
fn random_room(
    grid: &Grid,
    target: (i32, i32),
    opts: &GenOptions,
    rng: &mut MapRng,
) -> Option<Room> {
    let width = rng.between(opts.min_room_extent, opts.max_room_extent);
    let height = rng.between(opts.min_room_extent, opts.max_room_extent);
    let (x, y) = grid.find_fit(target.0, target.1, width, height)?;
    Some(Room::new(x, y, width, height))
}

/// Generate a map with the default options.
///
/// See [`generate_map_with`].
pub fn generate_map(
    width: i32,
    height: i32,
    room_count: u32,
    rng: &mut MapRng,
) -> Result<Grid, GenerationError> {
    generate_map_with(width, height, room_count, &GenOptions::default(), rng)
}

/// Generate a width x height map holding one seed room plus
/// `room_count` grown rooms, each grown room connected to its parent
/// by a door.
///
/// Fails with a typed error when a placement bound is exhausted; a
/// partially grown map is never returned.
pub fn generate_map_with(
    width: i32,
    height: i32,
    room_count: u32,
    opts: &GenOptions,
    rng: &mut MapRng,
) -> Result<Grid, GenerationError> {
    let mut grid = Grid::new(width, height);

    // Seed room: anchored over a uniformly random in-bounds point.
    let seeded = with_retries(opts.attempt_limit, || {
        let target = (rng.upto(width), rng.upto(height));
        match random_room(&grid, target, opts, rng) {
            Some(room) => {
                grid.insert(room);
                true
            }
            None => false,
        }
    });
    if let Retry::Exhausted = seeded {
        return Err(GenerationError::SeedExhausted {
            attempts: opts.attempt_limit,
        });
    }

    for placed in 0..room_count {
        let grown = with_retries(opts.attempt_limit, || {
            let parent = rng.upto(grid.rooms().len() as i32) as usize;
            let exit = grid.rooms()[parent].random_exit_position(rng);
            match random_room(&grid, exit, opts, rng) {
                Some(room) => {
                    grid.room_mut(parent).add_door(exit);
                    grid.insert(room);
                    true
                }
                None => false,
            }
        });
        if let Retry::Exhausted = grown {
            return Err(GenerationError::GrowthExhausted {
                placed,
                requested: room_count,
            });
        }
    }

    Ok(grid)
}
