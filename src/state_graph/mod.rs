mod cache;
mod json_export;
mod models;
mod neighbors;
mod shuffle;
mod solve;

pub use json_export::get_json_data;
pub use models::{BoardState, MoveResult, StateCache, StateId};
pub use neighbors::{attempt_move, neighbors};
pub use shuffle::shuffle;
pub use solve::solve;
