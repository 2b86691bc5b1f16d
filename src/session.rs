use rand::Rng;

use crate::core::{NUM_SHUFFLE_STEPS, StateKey, SUPPORTED_BOARD_SIZES, TileGrid, TileSlide};
use crate::state_graph::{
    BoardState, MoveResult, StateCache, StateId, attempt_move, shuffle, solve,
};

/// Outcome of a single tap-to-move request.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The clicked tile slid into the blank; `solved` reports whether
    /// the resulting arrangement matches the session's goal key.
    Moved { slide: TileSlide, solved: bool },
    Rejected(String),
    /// An animation is still playing; the request was dropped.
    Ignored,
}

#[derive(Debug)]
pub enum SolveOutcome {
    /// A path was found and queued; carries the number of frames.
    Animating(usize),
    NoPath,
    Ignored,
}

/// One puzzle session: the state cache, the current arrangement, the
/// goal key recorded at initialization, and any pending solve
/// animation. Everything runs synchronously on the caller's thread;
/// requests arriving while frames are pending are ignored to keep a
/// single writer over the current state.
pub struct PuzzleSession {
    cache: StateCache,
    size: usize,
    current: StateId,
    goal_key: StateKey,
    animation: Vec<StateId>,
    animation_pos: usize,
}

impl PuzzleSession {
    pub fn new(size: usize) -> PuzzleSession {
        let size = clamp_board_size(size);
        let mut cache = StateCache::new();
        let solved = TileGrid::solved(size);
        let goal_key = solved.key();
        let current = cache.lookup_or_insert(BoardState {
            grid: solved,
            depth: 0,
        });
        PuzzleSession {
            cache,
            size,
            current,
            goal_key,
            animation: Vec::new(),
            animation_pos: 0,
        }
    }

    /// Atomic session reset: clears the cache, reseeds it with the
    /// solved arrangement for `size`, and drops any pending animation.
    /// Also how a board-size change is applied; a live session's grid
    /// dimension is never mutated in place.
    pub fn initialize(&mut self, size: usize) {
        *self = PuzzleSession::new(size);
    }

    pub fn board_size(&self) -> usize {
        self.size
    }

    pub fn goal_key(&self) -> &StateKey {
        &self.goal_key
    }

    pub fn current_id(&self) -> StateId {
        self.current
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn current_state(&self) -> &BoardState {
        self.cache
            .get_state(self.current)
            .expect("the current id always points into the session cache")
    }

    pub fn current_grid(&self) -> &TileGrid {
        &self.current_state().grid
    }

    pub fn is_solved(&self) -> bool {
        self.cache.key_of(self.current) == Some(&self.goal_key)
    }

    /// Scrambles with a fixed-length random walk. Returns false when an
    /// animation is pending and the request was ignored.
    pub fn request_shuffle<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.animation_in_progress() {
            return false;
        }
        self.current = shuffle(&mut self.cache, self.current, NUM_SHUFFLE_STEPS, rng);
        log::debug!(
            "shuffled to depth {} ({} cached states)",
            self.current_state().depth,
            self.cache.len()
        );
        true
    }

    pub fn request_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.animation_in_progress() {
            return MoveOutcome::Ignored;
        }
        match attempt_move(&mut self.cache, self.current, row, col) {
            MoveResult::Moved { to, slide } => {
                self.current = to;
                let solved = self.cache.key_of(to) == Some(&self.goal_key);
                MoveOutcome::Moved { slide, solved }
            }
            MoveResult::Rejected(reason) => MoveOutcome::Rejected(reason),
        }
    }

    /// Searches for a path back to the goal and queues it as the
    /// pending animation.
    pub fn request_solve(&mut self) -> SolveOutcome {
        if self.animation_in_progress() {
            return SolveOutcome::Ignored;
        }
        let Some(goal) = self.cache.get_by_key(&self.goal_key) else {
            return SolveOutcome::NoPath;
        };
        let path = solve(&mut self.cache, self.current, goal);
        if path.is_empty() {
            log::debug!("no path from the current arrangement to the goal");
            return SolveOutcome::NoPath;
        }
        let frames = path.len();
        self.animation = path;
        self.animation_pos = 0;
        SolveOutcome::Animating(frames)
    }

    pub fn animation_in_progress(&self) -> bool {
        self.animation_pos < self.animation.len()
    }

    pub fn pending_frames(&self) -> &[StateId] {
        &self.animation[self.animation_pos..]
    }

    /// Pops one queued frame and makes it the current arrangement. The
    /// caller re-invokes after a fixed delay; there is no internal
    /// timer or background thread.
    pub fn advance_animation(&mut self) -> Option<StateId> {
        if !self.animation_in_progress() {
            return None;
        }
        let frame = self.animation[self.animation_pos];
        self.animation_pos += 1;
        self.current = frame;
        if !self.animation_in_progress() {
            self.animation.clear();
            self.animation_pos = 0;
        }
        Some(frame)
    }
}

fn clamp_board_size(size: usize) -> usize {
    let min = SUPPORTED_BOARD_SIZES[0];
    let max = SUPPORTED_BOARD_SIZES[SUPPORTED_BOARD_SIZES.len() - 1];
    size.clamp(min, max)
}
