//! Generation failure types.

use thiserror::Error;

/// Fatal outcomes of a generation run.
///
/// Retry exhaustion fails the whole call; a map with fewer rooms than
/// requested is never returned silently.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The seed room never found an in-bounds anchor
    #[error("seed room placement failed after {attempts} attempts")]
    SeedExhausted { attempts: u32 },

    /// A growth step ran out of placement attempts
    #[error("map growth stalled after {placed} of {requested} rooms")]
    GrowthExhausted { placed: u32, requested: u32 },
}
