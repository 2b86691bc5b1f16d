use crate::core::{StateKey, TileGrid, TileSlide};

/// Handle to the one canonical instance of an arrangement within a
/// session's cache.
pub type StateId = usize;

/// A canonicalized arrangement plus the step count recorded when it was
/// first discovered. `depth` is bookkeeping, not identity: equality of
/// arrangements is equality of grids.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub grid: TileGrid,
    pub depth: usize,
}

/// Session-wide memoization table mapping each state key to the single
/// shared `BoardState` for that arrangement. Entries are only removed
/// by a full `clear` when the session resets.
pub struct StateCache {
    pub(crate) keys: bimap::BiMap<StateKey, StateId>,
    pub(crate) states: Vec<BoardState>,
}

/// Result of a click-driven single move.
#[derive(Debug)]
pub enum MoveResult {
    Moved { to: StateId, slide: TileSlide },
    Rejected(String),
}
