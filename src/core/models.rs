/// One numbered puzzle piece. Identities run 1..N²-1; the solved board
/// reads them in row-major order with the blank in the last cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tile(pub u8);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An N×N arrangement of tiles, row-major. Exactly one cell is blank
/// (`None`) and every identity appears exactly once; equality and
/// hashing derive purely from the cell sequence.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TileGrid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Option<Tile>>,
}

/// Canonical one-character-per-cell encoding of a grid. Two grids are
/// logically identical iff their keys are equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StateKey(pub(crate) String);

impl StateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which cell a tile just left and which it landed in. Handed to the
/// renderer to drive the slide animation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileSlide {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug)]
pub enum SlideUpdate {
    NextGrid(TileGrid, TileSlide),
    Error(String),
}
