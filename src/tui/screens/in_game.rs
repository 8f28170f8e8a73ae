//! In-game screen: the board, the cursor and the round status.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::session::RoundSession;
use crate::tui::input::{Cursor, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_bar, draw_board, draw_title};

/// In-game screen wrapping a [`RoundSession`].
#[derive(Debug)]
pub struct InGameScreen {
    session: RoundSession,
    cursor: Cursor,
}

impl InGameScreen {
    /// Starts a match with the given configuration.
    #[instrument(skip(config), fields(size = %config.board_size()))]
    pub fn new(config: GameConfig) -> Self {
        let cursor = Cursor::centered(config.board_size().get());
        Self::with_session(RoundSession::new(config), cursor)
    }

    /// Wraps an existing session.
    pub fn with_session(session: RoundSession, cursor: Cursor) -> Self {
        debug!("Initializing InGameScreen");
        Self { session, cursor }
    }

    /// The running match.
    pub fn session(&self) -> &RoundSession {
        &self.session
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[instrument(skip(self))]
    fn place_mark(&mut self) {
        let (row, col) = (self.cursor.row() as isize, self.cursor.col() as isize);
        if let Err(e) = self.session.play(row, col, Instant::now()) {
            debug!(error = %e, row, col, "Move ignored");
        }
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let config = self.session.config();
        let title = format!(
            "{} (X) vs {} (O) | {}",
            config.player_one(),
            config.player_two(),
            config.board_size()
        );
        draw_title(frame, chunks[0], &title);
        draw_board(frame, chunks[1], self.session.game(), self.cursor);

        let status_color = if self.session.game().outcome().is_terminal() {
            Color::Green
        } else {
            Color::Yellow
        };
        draw_bar(frame, chunks[2], &self.session.status_line(), status_color);
        draw_bar(
            frame,
            chunks[3],
            "Arrows: Move | Enter/Space: Place | r: Restart | q: Quit",
            Color::DarkGray,
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.restart();
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving game");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictacgrid_rules::{Outcome, Player};

    fn screen() -> InGameScreen {
        InGameScreen::new(GameConfig::new("Ana", "Luis", 3).unwrap())
    }

    fn press(screen: &mut InGameScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_place_at_cursor() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Enter);
        let game = screen.session().game();
        assert_eq!(game.cell_at(1, 1).and_then(|c| c.player()), Some(Player::X));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.session().game().current_player(), Player::O);
        assert_eq!(screen.session().game().board().count(Player::O), 0);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char('r'));
        assert_eq!(screen.session().game().outcome(), Outcome::InProgress);
        assert_eq!(screen.session().game().board().count(Player::X), 0);
    }

    #[test]
    fn test_quit() {
        let mut screen = screen();
        assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Quit);
    }
}
