//! Name entry screen: both players type their display names.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictacgrid_rules::Player;
use tracing::{debug, info, instrument};

use crate::config::validate_name;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_bar, draw_title};

/// State for the name entry screen.
#[derive(Debug)]
pub struct NameEntryScreen {
    player_one: String,
    player_two: String,
    focus: Player,
    error_message: Option<String>,
}

impl NameEntryScreen {
    /// Creates the screen, optionally pre-filled.
    #[instrument]
    pub fn new(player_one: Option<String>, player_two: Option<String>) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            player_one: player_one.unwrap_or_default(),
            player_two: player_two.unwrap_or_default(),
            focus: Player::X,
            error_message: None,
        }
    }

    /// Player whose field has focus.
    pub fn focus(&self) -> Player {
        self.focus
    }

    /// Last validation error, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Player::X => &mut self.player_one,
            Player::O => &mut self.player_two,
        }
    }

    /// Validates both fields and moves on when they are filled in.
    #[instrument(skip(self))]
    fn submit(&mut self) -> ScreenTransition {
        let names = validate_name(&self.player_one)
            .and_then(|one| validate_name(&self.player_two).map(|two| (one, two)));
        match names {
            Ok((player_one, player_two)) => {
                info!(%player_one, %player_two, "Names confirmed");
                ScreenTransition::GoToSizeSelect {
                    player_one,
                    player_two,
                }
            }
            Err(e) => {
                debug!(error = %e, "Names refused");
                self.error_message = Some(e.message);
                ScreenTransition::Stay
            }
        }
    }

    fn field_block(&self, player: Player) -> Paragraph<'_> {
        let (label, text) = match player {
            Player::X => ("Player One (X)", self.player_one.as_str()),
            Player::O => ("Player Two (O)", self.player_two.as_str()),
        };
        let style = if self.focus == player {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(label))
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        draw_title(frame, chunks[0], "Enter Player Names");
        frame.render_widget(self.field_block(Player::X), chunks[1]);
        frame.render_widget(self.field_block(Player::O), chunks[2]);

        if let Some(error) = &self.error_message {
            let error = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(error, chunks[3]);
        }

        draw_bar(
            frame,
            chunks[4],
            "Tab: Switch field | Enter: Continue | Esc: Quit",
            Color::DarkGray,
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.field_mut().push(c);
                self.error_message = None;
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.field_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                info!("Leaving name entry");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
