//! Stateless rendering helpers for the game board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictacgrid_rules::{Cell, GameState, Player, WinningLine};

use super::input::Cursor;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the screen title bar.
pub fn draw_title(frame: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Renders a bordered single-line help or status bar.
pub fn draw_bar(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let bar = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Renders the grid centred in `area`, highlighting the cursor and any winning line.
pub fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Cursor) {
    let side = game.size().get();
    let width = CELL_WIDTH * side as u16;
    let height = CELL_HEIGHT * side as u16;
    let board_area = center_rect(area, width, height);
    let line = game.winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); side])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); side])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            let cell = game.cell_at(row, col).unwrap_or_default();
            draw_cell(frame, *cell_area, cell, cursor.is_at(row, col), line.as_ref(), (row, col));
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    selected: bool,
    line: Option<&WinningLine>,
    (row, col): (usize, usize),
) {
    let (symbol, color) = match cell {
        Cell::Empty => (" ", Color::DarkGray),
        Cell::Marked(Player::X) => ("X", Color::Red),
        Cell::Marked(Player::O) => ("O", Color::Blue),
    };

    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if line.is_some_and(|l| l.contains(row, col)) {
        style = style.bg(Color::Green);
    }
    let border = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

/// Returns a `width` x `height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
