use crate::core::consts::BLANK_KEY_CHAR;
use crate::core::{Direction, StateKey, Tile, TileGrid};

impl TileGrid {
    /// The goal arrangement: 1..N²-1 in row-major order, blank last.
    pub fn solved(size: usize) -> TileGrid {
        let cell_count = size * size;
        let mut cells: Vec<Option<Tile>> = (1..cell_count).map(|n| Some(Tile(n as u8))).collect();
        cells.push(None);
        TileGrid { size, cells }
    }

    pub fn from_cells(size: usize, cells: Vec<Option<Tile>>) -> TileGrid {
        assert_eq!(
            cells.len(),
            size * size,
            "cell count must match the grid dimension"
        );
        TileGrid { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells[row * self.size + col]
    }

    pub fn blank_index(&self) -> usize {
        self.cells
            .iter()
            .position(|c| c.is_none())
            .expect("a tile grid always has exactly one blank cell")
    }

    pub fn is_solved(&self) -> bool {
        for i in 0..self.cells.len() - 1 {
            match self.cells[i] {
                Some(tile) => {
                    if tile.0 as usize != i + 1 {
                        return false;
                    }
                }
                None => return false,
            }
        }
        self.cells[self.cells.len() - 1].is_none()
    }

    /// Pure function of the cell sequence, stable across calls. One
    /// base-36 digit per tile keeps the encoding injective up to the
    /// largest supported board.
    pub fn key(&self) -> StateKey {
        let mut key = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            match cell {
                Some(tile) => key.push(char::from_digit(tile.0 as u32, 36).unwrap_or('?')),
                None => key.push(BLANK_KEY_CHAR),
            }
        }
        StateKey(key)
    }

    pub(crate) fn with_swapped(&self, i: usize, j: usize) -> TileGrid {
        let mut cells = self.cells.clone();
        cells.swap(i, j);
        TileGrid {
            size: self.size,
            cells,
        }
    }
}

impl Direction {
    pub fn all_directions() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
