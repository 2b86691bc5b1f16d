use crate::core::{Direction, SlideUpdate, TileGrid, TileSlide};

/// Slides the tile sitting on side `direction` of the blank into the
/// blank. Fails without mutating anything when that cell lies outside
/// the grid; rows never wrap.
pub fn slide(grid: &TileGrid, direction: Direction) -> SlideUpdate {
    let n = grid.size() as i32;
    let blank = grid.blank_index();
    let bi = (blank / grid.size()) as i32;
    let bj = (blank % grid.size()) as i32;

    let delta = vec_from_dir(direction);
    let ti = bi + delta.0;
    let tj = bj + delta.1;
    if ti < 0 || tj < 0 || ti >= n || tj >= n {
        return SlideUpdate::Error("no tile beyond the grid edge".to_string());
    }

    let from = (ti * n + tj) as usize;
    SlideUpdate::NextGrid(
        grid.with_swapped(from, blank),
        TileSlide { from, to: blank },
    )
}

/// Tap-to-move variant: slides the tile at `(row, col)` only if the
/// blank is orthogonally adjacent to it.
pub fn slide_at(grid: &TileGrid, row: usize, col: usize) -> SlideUpdate {
    let n = grid.size();
    if row >= n || col >= n {
        return SlideUpdate::Error("cell is outside the grid".to_string());
    }
    let clicked = row * n + col;
    if grid.cells[clicked].is_none() {
        return SlideUpdate::Error("nothing to slide at the blank cell".to_string());
    }

    for direction in Direction::all_directions() {
        let delta = vec_from_dir(direction);
        let ni = row as i32 + delta.0;
        let nj = col as i32 + delta.1;
        if ni < 0 || nj < 0 || ni >= n as i32 || nj >= n as i32 {
            continue;
        }
        let neighbor = ni as usize * n + nj as usize;
        if grid.cells[neighbor].is_none() {
            return SlideUpdate::NextGrid(
                grid.with_swapped(clicked, neighbor),
                TileSlide {
                    from: clicked,
                    to: neighbor,
                },
            );
        }
    }

    SlideUpdate::Error("tile is not adjacent to the blank".to_string())
}

fn vec_from_dir(direction: Direction) -> (i32, i32) {
    match direction {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
    }
}
