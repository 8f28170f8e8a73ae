//! Player names and board size for a match.
//!
//! Values can come from a TOML file and from command-line flags. Whatever
//! is still missing is asked for on the setup screens.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Deserialize;
use std::path::Path;
use tictacgrid_rules::{BoardSize, Player};
use tracing::{debug, info, instrument};

/// Board sizes offered to players.
pub const SELECTABLE_SIZES: [usize; 3] = [3, 4, 5];

/// Fully validated match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Display name for X.
    player_one: String,
    /// Display name for O.
    player_two: String,
    /// Side length of every round's board.
    board_size: BoardSize,
}

impl GameConfig {
    /// Creates a configuration, trimming and validating every field.
    #[instrument(skip(player_one, player_two))]
    pub fn new(
        player_one: impl AsRef<str>,
        player_two: impl AsRef<str>,
        board_size: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            player_one: validate_name(player_one.as_ref())?,
            player_two: validate_name(player_two.as_ref())?,
            board_size: validate_size(board_size)?,
        })
    }

    /// Returns the display name for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_one,
            Player::O => &self.player_two,
        }
    }
}

/// Configuration as supplied, any field possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters, new)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    /// Display name for X.
    #[serde(default)]
    player_one: Option<String>,
    /// Display name for O.
    #[serde(default)]
    player_two: Option<String>,
    /// Requested board side length.
    #[serde(default)]
    board_size: Option<usize>,
}

impl PartialConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Fills gaps in `self` from `fallback`. Values already in `self` win.
    #[instrument(skip_all)]
    pub fn or(self, fallback: PartialConfig) -> Self {
        Self {
            player_one: self.player_one.or(fallback.player_one),
            player_two: self.player_two.or(fallback.player_two),
            board_size: self.board_size.or(fallback.board_size),
        }
    }

    /// Validated names, if both are present.
    #[instrument(skip(self))]
    pub fn names(&self) -> Result<Option<(String, String)>, ConfigError> {
        match (&self.player_one, &self.player_two) {
            (Some(one), Some(two)) => Ok(Some((validate_name(one)?, validate_name(two)?))),
            _ => Ok(None),
        }
    }

    /// Validated board size, if present.
    #[instrument(skip(self))]
    pub fn size(&self) -> Result<Option<BoardSize>, ConfigError> {
        self.board_size.map(validate_size).transpose()
    }
}

/// Trims a display name and refuses it when blank.
#[instrument]
pub fn validate_name(name: &str) -> Result<String, ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::new("Player names cannot be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Accepts only the offered board sizes.
#[instrument]
pub fn validate_size(size: usize) -> Result<BoardSize, ConfigError> {
    if !SELECTABLE_SIZES.contains(&size) {
        return Err(ConfigError::new(format!(
            "Board size {} is not offered (choose 3, 4 or 5)",
            size
        )));
    }
    BoardSize::new(size).map_err(|e| ConfigError::new(e.to_string()))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let config = GameConfig::new("  Ana ", "Luis", 4).unwrap();
        assert_eq!(config.player_one(), "Ana");
        assert_eq!(config.name_of(Player::O), "Luis");
        assert_eq!(config.board_size().get(), 4);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(GameConfig::new("   ", "Luis", 3).is_err());
        assert!(GameConfig::new("Ana", "", 3).is_err());
    }

    #[test]
    fn test_unoffered_size_rejected() {
        for size in [0, 2, 6, 10] {
            assert!(validate_size(size).is_err(), "size {size} should be refused");
        }
        for size in SELECTABLE_SIZES {
            assert_eq!(validate_size(size).unwrap().get(), size);
        }
    }

    #[test]
    fn test_or_prefers_self() {
        let cli = PartialConfig::new(Some("Ana".into()), None, None);
        let file = PartialConfig::new(Some("Bea".into()), Some("Luis".into()), Some(5));
        let merged = cli.or(file);
        assert_eq!(merged.player_one().as_deref(), Some("Ana"));
        assert_eq!(merged.player_two().as_deref(), Some("Luis"));
        assert_eq!(merged.board_size(), &Some(5));
    }

    #[test]
    fn test_names_need_both() {
        let partial = PartialConfig::new(Some("Ana".into()), None, None);
        assert_eq!(partial.names().unwrap(), None);

        let partial = PartialConfig::new(Some("Ana".into()), Some(" ".into()), None);
        assert!(partial.names().is_err());
    }

    #[test]
    fn test_error_records_location() {
        let error = ConfigError::new("boom".to_string());
        assert!(error.file.ends_with("config.rs"));
        assert!(error.to_string().starts_with("Config error: boom"));
    }
}
