//! Controller: the state machine driving the multi-screen TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tictacgrid_rules::BoardSize;
use tracing::{debug, info, instrument, warn};

use crate::config::{ConfigError, GameConfig, PartialConfig};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{InGameScreen, NameEntryScreen, SizeSelectScreen};

/// Active screen in the state machine.
#[derive(Debug, strum::AsRefStr)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    SizeSelect(SizeSelectScreen),
    InGame(InGameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::SizeSelect(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::SizeSelect(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }
}

/// Controller that drives the screens.
///
/// Setup screens whose values were already supplied are skipped.
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    names: Option<(String, String)>,
    size: Option<BoardSize>,
    screen: ActiveScreen,
    running: bool,
}

impl Controller {
    /// Creates a controller from whatever configuration is already known.
    #[instrument(skip(partial))]
    pub fn new(partial: PartialConfig) -> Result<Self, ConfigError> {
        let names = partial.names()?;
        let size = partial.size()?;
        info!(
            names_known = names.is_some(),
            size_known = size.is_some(),
            "Creating Controller"
        );

        let screen = match (&names, size) {
            (None, _) => ActiveScreen::NameEntry(NameEntryScreen::new(
                partial.player_one().clone(),
                partial.player_two().clone(),
            )),
            (Some(_), None) => ActiveScreen::SizeSelect(SizeSelectScreen::new()),
            (Some((one, two)), Some(size)) => {
                ActiveScreen::InGame(InGameScreen::new(GameConfig::new(one, two, size.get())?))
            }
        };

        Ok(Self {
            names,
            size,
            screen,
            running: true,
        })
    }

    /// Name of the active screen.
    pub fn screen_name(&self) -> &str {
        self.screen.as_ref()
    }

    /// Checks if the user has not quit yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The in-game screen, once play has started.
    pub fn in_game(&self) -> Option<&InGameScreen> {
        match &self.screen {
            ActiveScreen::InGame(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame);
    }

    /// Forwards a key press to the active screen and applies the transition.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let transition = self.screen.as_screen_mut().handle_key(key);
        self.apply_transition(transition);
    }

    /// Advances timers on the active screen.
    pub fn tick(&mut self, now: Instant) {
        self.screen.as_screen_mut().tick(now);
    }

    /// Applies a screen transition.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToSizeSelect {
                player_one,
                player_two,
            } => {
                self.names = Some((player_one, player_two));
                match self.size {
                    Some(size) => self.start_game(size),
                    None => {
                        info!("Navigating to SizeSelect");
                        self.screen = ActiveScreen::SizeSelect(SizeSelectScreen::new());
                    }
                }
            }
            ScreenTransition::StartGame(size) => {
                self.size = Some(size);
                self.start_game(size);
            }
            ScreenTransition::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn start_game(&mut self, size: BoardSize) {
        let config = self
            .names
            .as_ref()
            .ok_or_else(|| ConfigError::new("Player names are missing".to_string()))
            .and_then(|(one, two)| GameConfig::new(one, two, size.get()));

        self.screen = match config {
            Ok(config) => {
                info!(%size, "Navigating to InGame");
                ActiveScreen::InGame(InGameScreen::new(config))
            }
            Err(e) => {
                warn!(error = %e, "Cannot start game, asking for names again");
                ActiveScreen::NameEntry(NameEntryScreen::new(None, None))
            }
        };
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while self.running {
            terminal.draw(|f| self.render(f))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind != KeyEventKind::Release {
                    debug!(code = ?key.code, "Key pressed");
                    self.handle_key(key);
                }
            }

            self.tick(Instant::now());
        }

        info!("Event loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(controller: &mut Controller, code: KeyCode) {
        controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_at_name_entry() {
        let controller = Controller::new(PartialConfig::default()).unwrap();
        assert_eq!(controller.screen_name(), "NameEntry");
    }

    #[test]
    fn test_skips_supplied_screens() {
        let partial = PartialConfig::new(Some("Ana".into()), Some("Luis".into()), None);
        let controller = Controller::new(partial).unwrap();
        assert_eq!(controller.screen_name(), "SizeSelect");

        let partial = PartialConfig::new(Some("Ana".into()), Some("Luis".into()), Some(4));
        let controller = Controller::new(partial).unwrap();
        assert_eq!(controller.screen_name(), "InGame");
    }

    #[test]
    fn test_invalid_supplied_size_is_an_error() {
        let partial = PartialConfig::new(None, None, Some(7));
        assert!(Controller::new(partial).is_err());
    }

    #[test]
    fn test_size_supplied_skips_selection_after_names() {
        let partial = PartialConfig::new(None, None, Some(5));
        let mut controller = Controller::new(partial).unwrap();
        for c in "Ana".chars() {
            press(&mut controller, KeyCode::Char(c));
        }
        press(&mut controller, KeyCode::Tab);
        for c in "Luis".chars() {
            press(&mut controller, KeyCode::Char(c));
        }
        press(&mut controller, KeyCode::Enter);

        assert_eq!(controller.screen_name(), "InGame");
        let game = controller.in_game().map(|s| s.session().game().size().get());
        assert_eq!(game, Some(5));
    }

    #[test]
    fn test_quit_stops_running() {
        let mut controller = Controller::new(PartialConfig::default()).unwrap();
        press(&mut controller, KeyCode::Esc);
        assert!(!controller.is_running());
    }
}
