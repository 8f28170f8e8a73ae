//! Round session: one match between two named players.
//!
//! The session owns the current [`GameState`] and drives the round
//! lifecycle around it. When a round ends it schedules a reset
//! [`RESET_DELAY`] later; the front-end calls [`RoundSession::tick`]
//! on every frame and the board is replaced once the deadline passes.

use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tictacgrid_rules::{GameState, MoveError, Outcome, Player};
use tracing::{debug, info, instrument};

/// Pause between a finished round and the fresh board.
pub const RESET_DELAY: Duration = Duration::from_secs(1);

/// A running match.
#[derive(Debug)]
pub struct RoundSession<R = StdRng> {
    config: GameConfig,
    game: GameState,
    rng: R,
    reset_at: Option<Instant>,
}

impl RoundSession<StdRng> {
    /// Creates a session seeded from the operating system.
    #[instrument(skip(config), fields(size = %config.board_size()))]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RoundSession<R> {
    /// Creates a session with the given random source. X opens the first round.
    #[instrument(skip(config, rng), fields(size = %config.board_size()))]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        info!(
            player_one = %config.player_one(),
            player_two = %config.player_two(),
            "Starting match"
        );
        let game = GameState::new(*config.board_size(), Player::X);
        Self {
            config,
            game,
            rng,
            reset_at: None,
        }
    }

    /// Forwards a move to the game and schedules the reset when it ends the round.
    ///
    /// Moves arriving while a reset is pending are refused by the game
    /// with [`MoveError::GameAlreadyOver`].
    #[instrument(skip(self, now))]
    pub fn play(&mut self, row: isize, col: isize, now: Instant) -> Result<Outcome, MoveError> {
        let outcome = self.game.apply_move(row, col)?;
        if outcome.is_terminal() {
            info!(?outcome, "Round over, scheduling reset");
            self.reset_at = Some(now + RESET_DELAY);
        }
        Ok(outcome)
    }

    /// Replaces the finished board once the reset deadline has passed.
    ///
    /// The new round's opener is drawn 50/50. Returns true when a reset happened.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.reset_at
            && now >= deadline
        {
            let starting = if self.rng.gen_bool(0.5) {
                Player::X
            } else {
                Player::O
            };
            info!(%starting, "Automatic reset");
            self.start_round(starting);
            return true;
        }
        false
    }

    /// Resets immediately on request. X opens.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restart requested");
        self.start_round(Player::X);
    }

    fn start_round(&mut self, starting: Player) {
        self.game = GameState::new(*self.config.board_size(), starting);
        self.reset_at = None;
        debug!(%starting, "Fresh board");
    }

    /// Returns the current round.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Checks if a finished round is waiting for its reset.
    pub fn reset_pending(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Returns the display name for a player.
    pub fn player_name(&self, player: Player) -> &str {
        self.config.name_of(player)
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        match self.game.outcome() {
            Outcome::InProgress => format!("Turn: {}", self.player_name(self.game.current_player())),
            Outcome::Win(winner) => format!("Winner: {}", self.player_name(winner)),
            Outcome::Draw => "Draw".to_string(),
        }
    }
}
