// N×N sliding-tile puzzle in the terminal.
// Arrows move the cursor, Space/Enter slides the tile under it into the blank.
// S shuffles, V replays a solution, 3/4/5 restart at that board size, Q quits.

use PuzzleEngine::console_interface::ConsoleInput::*;
use PuzzleEngine::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal,
};
use PuzzleEngine::core::{Direction, SOLVE_FRAME_DELAY_MS, TileSlide};
use PuzzleEngine::models::BoardRenderState;
use PuzzleEngine::session::{MoveOutcome, PuzzleSession, SolveOutcome};
use PuzzleEngine::state_graph::get_json_data;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let mut terminal = setup_terminal()?;
    let result = run_interactive(size, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    size: usize,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = PuzzleSession::new(size);
    let mut rng = rand::rng();
    let mut cursor = (0usize, 0usize);
    let mut status: Option<String> = None;
    let mut last_slide: Option<TileSlide> = None;
    let mut last_frame = Instant::now();
    let frame_delay = Duration::from_millis(SOLVE_FRAME_DELAY_MS);

    render_session(terminal, &session, cursor, &status, last_slide)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Cursor(direction)) => {
                cursor = move_cursor(cursor, direction, session.board_size());
            }
            Ok(Activate) => match session.request_move(cursor.0, cursor.1) {
                MoveOutcome::Moved { slide, solved } => {
                    last_slide = Some(slide);
                    status = if solved {
                        Some("Congratulations!".to_string())
                    } else {
                        None
                    };
                }
                MoveOutcome::Rejected(reason) => {
                    status = Some(reason);
                }
                MoveOutcome::Ignored => {}
            },
            Ok(Shuffle) => {
                if session.request_shuffle(&mut rng) {
                    status = None;
                    last_slide = None;
                }
            }
            Ok(Solve) => match session.request_solve() {
                SolveOutcome::Animating(frames) => {
                    status = Some(format!("Replaying {} states", frames));
                    last_slide = None;
                    export_solution(&session)?;
                    last_frame = Instant::now();
                }
                SolveOutcome::NoPath => {
                    status = Some("No path found".to_string());
                }
                SolveOutcome::Ignored => {}
            },
            Ok(Resize(new_size)) => {
                session.initialize(new_size);
                cursor = (0, 0);
                status = None;
                last_slide = None;
            }
            Ok(Timeout) | Ok(Unknown) => {}
            Err(_) => {
                println!("error reading input");
                break;
            }
        }

        // One frame per elapsed delay; never a blocking sleep.
        if session.animation_in_progress() && last_frame.elapsed() >= frame_delay {
            session.advance_animation();
            last_frame = Instant::now();
            if !session.animation_in_progress() && session.is_solved() {
                status = Some("Solved!".to_string());
            }
        }

        render_session(terminal, &session, cursor, &status, last_slide)?;
    }

    Ok(())
}

fn move_cursor(cursor: (usize, usize), direction: Direction, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(size - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(size - 1)),
    }
}

fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &PuzzleSession,
    cursor: (usize, usize),
    status: &Option<String>,
    last_slide: Option<TileSlide>,
) -> Result<(), Box<dyn std::error::Error>> {
    let to_render = BoardRenderState {
        grid: session.current_grid().clone(),
        cursor,
        status: status.clone(),
        solved: session.is_solved(),
        animating: session.animation_in_progress(),
        last_slide,
    };
    render_game(terminal, &to_render)
}

fn export_solution(session: &PuzzleSession) -> Result<(), Box<dyn std::error::Error>> {
    let json_data = get_json_data(session.cache(), session.pending_frames());
    std::fs::create_dir_all("exports")?;
    std::fs::write("exports/solution.json", json_data)?;
    Ok(())
}
