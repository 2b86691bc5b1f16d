use crate::core::{Direction, SlideUpdate, slide, slide_at};
use crate::state_graph::models::{BoardState, MoveResult, StateCache, StateId};

/// Generates the up-to-four successors of `from` in a fixed direction
/// order, canonicalizing each through the cache with
/// `depth = parent + 1`. A slide back toward the state's own parent is
/// generated like any other candidate and resolves to the cached
/// instance.
pub fn neighbors(cache: &mut StateCache, from: StateId) -> Vec<StateId> {
    let Some(from_state) = cache.get_state(from) else {
        return Vec::new();
    };
    let from_grid = from_state.grid.clone();
    let from_depth = from_state.depth;

    let mut result = Vec::with_capacity(4);
    for direction in Direction::all_directions() {
        if let SlideUpdate::NextGrid(new_grid, _) = slide(&from_grid, direction) {
            let id = cache.lookup_or_insert(BoardState {
                grid: new_grid,
                depth: from_depth + 1,
            });
            result.push(id);
        }
    }
    result
}

/// Single-step variant driven by a click on the cell at `(row, col)`.
pub fn attempt_move(cache: &mut StateCache, from: StateId, row: usize, col: usize) -> MoveResult {
    let Some(from_state) = cache.get_state(from) else {
        return MoveResult::Rejected("unknown state handle".to_string());
    };
    let from_grid = from_state.grid.clone();
    let from_depth = from_state.depth;

    match slide_at(&from_grid, row, col) {
        SlideUpdate::NextGrid(new_grid, tile_slide) => {
            let to = cache.lookup_or_insert(BoardState {
                grid: new_grid,
                depth: from_depth + 1,
            });
            MoveResult::Moved {
                to,
                slide: tile_slide,
            }
        }
        SlideUpdate::Error(reason) => MoveResult::Rejected(reason),
    }
}
