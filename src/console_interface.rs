use crate::core::{Direction, Tile, TileGrid};
use crate::models::BoardRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Parses a whitespace-separated board with `_` marking the blank:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 _
/// ```
pub fn parse_grid(s: &str) -> TileGrid {
    let mut cells: Vec<Option<Tile>> = Vec::new();
    let mut rows = 0;
    for line in s.lines() {
        if line.trim().is_empty() {
            continue;
        }
        rows += 1;
        for token in line.split_whitespace() {
            if token == "_" {
                cells.push(None);
            } else {
                let number: u8 = token.parse().expect("board cells are numbers or _");
                cells.push(Some(Tile(number)));
            }
        }
    }
    TileGrid::from_cells(rows, cells)
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &BoardRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let board_paragraph = Paragraph::new(board_text(state))
            .block(Block::default().borders(Borders::ALL).title("Puzzle"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        let instructions = if state.animating {
            "Replaying solution..."
        } else if state.solved {
            "Congratulations! S to shuffle, 3/4/5 for a new board, Q to quit"
        } else {
            "Arrows move the cursor, Space slides, S shuffle, V solve, Q quit"
        };

        let instructions = if let Some(status) = &state.status {
            format!("{} | {}", instructions, status)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn board_text(state: &BoardRenderState) -> Text<'static> {
    let grid = &state.grid;
    let width = cell_width(grid);
    let mut lines = Vec::with_capacity(grid.size());
    for row in 0..grid.size() {
        let mut spans = Vec::new();
        for col in 0..grid.size() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            let label = match grid.cell(row, col) {
                Some(tile) => format!("{:>width$}", tile.0, width = width),
                None => format!("{:>width$}", '_', width = width),
            };
            let index = row * grid.size() + col;
            let mut style = Style::default();
            if state.cursor == (row, col) && !state.animating {
                style = style.bg(Color::Yellow).fg(Color::Black);
            } else if state.last_slide.map(|s| s.to == index).unwrap_or(false) {
                style = style.fg(Color::Green);
            }
            spans.push(Span::styled(label, style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

pub fn render_board_to_string(grid: &TileGrid) -> String {
    let width = cell_width(grid);
    let mut result = String::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if col > 0 {
                result.push(' ');
            }
            match grid.cell(row, col) {
                Some(tile) => result.push_str(&format!("{:>width$}", tile.0, width = width)),
                None => result.push_str(&format!("{:>width$}", '_', width = width)),
            }
        }
        result.push('\n');
    }
    result
}

fn cell_width(grid: &TileGrid) -> usize {
    if grid.cell_count() > 10 { 2 } else { 1 }
}

pub enum ConsoleInput {
    Quit,
    Cursor(Direction),
    Activate,
    Shuffle,
    Solve,
    Resize(usize),
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Up => ConsoleInput::Cursor(Direction::Up),
                KeyCode::Down => ConsoleInput::Cursor(Direction::Down),
                KeyCode::Left => ConsoleInput::Cursor(Direction::Left),
                KeyCode::Right => ConsoleInput::Cursor(Direction::Right),
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Activate,
                KeyCode::Char('s') | KeyCode::Char('S') => ConsoleInput::Shuffle,
                KeyCode::Char('v') | KeyCode::Char('V') => ConsoleInput::Solve,
                KeyCode::Char('3') => ConsoleInput::Resize(3),
                KeyCode::Char('4') => ConsoleInput::Resize(4),
                KeyCode::Char('5') => ConsoleInput::Resize(5),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
