//! Roster configuration.
//!
//! `RosterSettings` controls how a fresh roster is built:
//! - the prefix used for auto-generated player names
//! - how many auto-named players a new roster starts with
//! - the minimum roster size needed to start a round

use serde::{Deserialize, Serialize};

/// Default prefix for auto-generated names ("Player 1", "Player 2", ...).
pub const DEFAULT_NAME_PREFIX: &str = "Player";

/// Default number of players in a fresh roster.
pub const DEFAULT_INITIAL_PLAYERS: usize = 2;

/// Smallest roster that can start a round.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Settings for a new roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSettings {
    /// Prefix of auto-generated names. A single space separates it from the number.
    pub name_prefix: String,

    /// Auto-named players created with the roster.
    pub initial_players: usize,

    /// Minimum number of players before a round may start.
    pub min_players: usize,
}

impl RosterSettings {
    /// Settings with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the auto-name prefix.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Set the number of players a new roster starts with.
    #[must_use]
    pub fn with_initial_players(mut self, count: usize) -> Self {
        self.initial_players = count;
        self
    }

    /// Set the minimum number of players for a round.
    ///
    /// Values below [`DEFAULT_MIN_PLAYERS`] are raised to it.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min.max(DEFAULT_MIN_PLAYERS);
        self
    }

    /// Minimum roster size actually enforced.
    ///
    /// Never below [`DEFAULT_MIN_PLAYERS`], even for settings loaded
    /// through serde with a smaller `min_players`.
    #[must_use]
    pub fn effective_min_players(&self) -> usize {
        self.min_players.max(DEFAULT_MIN_PLAYERS)
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            initial_players: DEFAULT_INITIAL_PLAYERS,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}
