//! Board size selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictacgrid_rules::BoardSize;
use tracing::{debug, info, instrument, warn};

use crate::config::{SELECTABLE_SIZES, validate_size};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_bar, draw_title};

/// State for the size selection screen.
#[derive(Debug)]
pub struct SizeSelectScreen {
    selected: usize,
}

impl SizeSelectScreen {
    /// Creates the screen with the classic 3x3 highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SizeSelectScreen");
        Self { selected: 0 }
    }

    /// Side length currently highlighted.
    pub fn selected(&self) -> usize {
        SELECTABLE_SIZES[self.selected]
    }

    #[instrument(skip(self))]
    fn confirm(&self, size: usize) -> ScreenTransition {
        match validate_size(size) {
            Ok(size) => {
                info!(%size, "Board size chosen");
                ScreenTransition::StartGame(size)
            }
            Err(e) => {
                warn!(error = %e, "Board size refused");
                ScreenTransition::Stay
            }
        }
    }
}

impl Default for SizeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SizeSelectScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        draw_title(frame, chunks[0], "Choose Board Size");

        let options: Vec<Span> = SELECTABLE_SIZES
            .iter()
            .enumerate()
            .flat_map(|(i, &side)| {
                let label = format!(" {} ", BoardSize::new(side).map(|s| s.to_string()).unwrap_or_default());
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                [Span::styled(label, style), Span::raw("   ")]
            })
            .collect();

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(options),
            Line::from(""),
            Line::from("Three in a row wins on every size."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, chunks[1]);

        draw_bar(
            frame,
            chunks[2],
            "←→: Select | Enter or 3/4/5: Start | Esc: Quit",
            Color::DarkGray,
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1).min(SELECTABLE_SIZES.len() - 1);
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.confirm(self.selected()),
            KeyCode::Char(c @ '3'..='5') => match c.to_digit(10) {
                Some(digit) => self.confirm(digit as usize),
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving size selection");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
