mod consts;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use models::{Direction, SlideUpdate, StateKey, Tile, TileGrid, TileSlide};
pub use update::{slide, slide_at};
