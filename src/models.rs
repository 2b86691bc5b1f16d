use crate::core::{TileGrid, TileSlide};

/// Snapshot handed to the renderer each frame.
pub struct BoardRenderState {
    pub grid: TileGrid,
    pub cursor: (usize, usize),
    pub status: Option<String>,
    pub solved: bool,
    pub animating: bool,
    pub last_slide: Option<TileSlide>,
}
