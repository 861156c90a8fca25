//! The editable roster: players plus the role distribution.
//!
//! ## Invariants
//!
//! - `role_counts` has an entry for every role.
//! - Unique roles are at most 1.
//! - Villager absorbs every player not holding a special role; it is
//!   recomputed after each change to the player list and never set by
//!   the user directly.
//!
//! Shrinking the roster below the number of special roles clamps villager
//! to zero without reducing special roles. The total then exceeds the
//! player count until the user removes special roles, and
//! [`RosterConfig::can_start_game`] reports false in the meantime.
//!
//! ## Example
//!
//! ```
//! use werwolf::core::Role;
//! use werwolf::roster::RosterConfig;
//!
//! let mut roster = RosterConfig::new();
//! roster.add_player();
//! roster.add_player();
//! roster.increment(Role::Werewolf);
//!
//! assert_eq!(roster.players().len(), 4);
//! assert_eq!(roster.role_counts()[Role::Werewolf], 1);
//! assert_eq!(roster.role_counts()[Role::Villager], 3);
//! assert!(roster.can_start_game());
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use super::counts::RoleCounts;
use super::naming;
use crate::core::{IdSource, Player, PlayerId, RandomIds, Role, RosterSettings};

/// Players and role counts being prepared for a round.
#[derive(Serialize)]
pub struct RosterConfig {
    players: Vec<Player>,
    role_counts: RoleCounts,
    settings: RosterSettings,
    #[serde(skip)]
    ids: Box<dyn IdSource + Send>,
}

impl RosterConfig {
    /// Default settings with random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(RosterSettings::default(), RandomIds)
    }

    /// Build a roster with `settings.initial_players` auto-named players,
    /// all villagers.
    pub fn with_settings(settings: RosterSettings, ids: impl IdSource + Send + 'static) -> Self {
        let mut roster = Self {
            players: Vec::with_capacity(settings.initial_players),
            role_counts: RoleCounts::new(),
            settings,
            ids: Box::new(ids),
        };
        for _ in 0..roster.settings.initial_players {
            roster.push_default_player();
        }
        roster.resynchronize();
        roster
    }

    // === Queries ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn role_counts(&self) -> &RoleCounts {
        &self.role_counts
    }

    #[must_use]
    pub fn settings(&self) -> &RosterSettings {
        &self.settings
    }

    /// Sum of all role counts, villagers included.
    #[must_use]
    pub fn total_assigned(&self) -> usize {
        self.role_counts.total()
    }

    /// Whether a round may be dealt from this roster.
    ///
    /// Requires at least `min_players` players (never fewer than two) and
    /// role counts summing to exactly the player count.
    #[must_use]
    pub fn can_start_game(&self) -> bool {
        self.players.len() >= self.settings.effective_min_players()
            && self.total_assigned() == self.players.len()
    }

    /// Whether [`increment`](Self::increment) would change anything.
    ///
    /// False for villager, for a unique role already in play, and whenever
    /// no villager is left to convert.
    #[must_use]
    pub fn can_increment(&self, role: Role) -> bool {
        if role == Role::Villager {
            return false;
        }
        if role.is_unique() && self.role_counts[role] >= 1 {
            return false;
        }
        self.role_counts[Role::Villager] > 0
    }

    /// Whether [`decrement`](Self::decrement) would change anything.
    #[must_use]
    pub fn can_decrement(&self, role: Role) -> bool {
        role != Role::Villager && self.role_counts[role] > 0
    }

    // === Player edits ===

    /// Append a player named `"<prefix> N"` with the lowest free N.
    ///
    /// Returns the new player's id.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        let id = self.push_default_player();
        self.resynchronize();
        id
    }

    /// Remove the players at `indices`.
    ///
    /// Indices refer to positions before removal. Out-of-range and
    /// repeated indices are ignored. Returns how many players were removed.
    pub fn remove_players(&mut self, indices: impl IntoIterator<Item = usize>) -> usize {
        let len = self.players.len();
        let mut targets: Vec<usize> = indices.into_iter().collect();
        targets.sort_unstable();
        targets.dedup();

        let (valid, ignored): (Vec<usize>, Vec<usize>) =
            targets.into_iter().partition(|&i| i < len);
        if !ignored.is_empty() {
            warn!(?ignored, len, "ignoring out-of-range player indices");
        }

        for &i in valid.iter().rev() {
            let removed = self.players.remove(i);
            debug!(index = i, name = %removed.name, "removed player");
        }

        if !valid.is_empty() {
            self.resynchronize();
        }
        valid.len()
    }

    /// Move the players at `from` so they sit before position `to`.
    ///
    /// `to` is a position in the list before the move (`len` means the
    /// end). Moved players keep their relative order. Out-of-range source
    /// indices are ignored. Counts are unaffected.
    pub fn move_players(&mut self, from: impl IntoIterator<Item = usize>, to: usize) -> bool {
        let len = self.players.len();
        let mut sources: Vec<usize> = from.into_iter().filter(|&i| i < len).collect();
        sources.sort_unstable();
        sources.dedup();
        if sources.is_empty() {
            return false;
        }

        let to = to.min(len);
        let insert_at = to - sources.iter().filter(|&&i| i < to).count();

        let mut moving = Vec::with_capacity(sources.len());
        for &i in sources.iter().rev() {
            moving.push(self.players.remove(i));
        }
        moving.reverse();

        let tail = self.players.split_off(insert_at);
        self.players.extend(moving);
        self.players.extend(tail);

        debug!(?sources, to, "moved players");
        true
    }

    /// Rename a player. Leading and trailing whitespace is trimmed; the
    /// empty string is allowed.
    ///
    /// Returns false if no player has `id`.
    pub fn update_player_name(&mut self, id: PlayerId, new_name: &str) -> bool {
        match self.players.iter_mut().find(|p| p.id() == id) {
            Some(player) => {
                player.name = new_name.trim().to_string();
                debug!(%id, name = %player.name, "renamed player");
                true
            }
            None => {
                warn!(%id, "rename failed: player not found");
                false
            }
        }
    }

    // === Role edits ===

    /// Convert one villager into `role`. No-op unless
    /// [`can_increment`](Self::can_increment).
    pub fn increment(&mut self, role: Role) -> bool {
        if !self.can_increment(role) {
            return false;
        }
        self.role_counts[role] += 1;
        self.role_counts[Role::Villager] = self.role_counts[Role::Villager].saturating_sub(1);
        debug!(%role, count = self.role_counts[role], "role incremented");
        true
    }

    /// Convert one `role` back into a villager. No-op if `role` is not in play.
    pub fn decrement(&mut self, role: Role) -> bool {
        if !self.can_decrement(role) {
            return false;
        }
        self.role_counts[role] -= 1;
        self.role_counts[Role::Villager] += 1;
        debug!(%role, count = self.role_counts[role], "role decremented");
        true
    }

    // === Internals ===

    fn push_default_player(&mut self) -> Option<PlayerId> {
        let prefix = &self.settings.name_prefix;
        let number = naming::lowest_free_number(self.players.iter().map(|p| p.name.as_str()), prefix);
        let name = naming::default_name(prefix, number);

        if self.players.iter().any(|p| p.name == name) {
            warn!(%name, "not adding player: name already taken");
            return None;
        }

        let id = self.ids.next_id();
        debug!(%id, %name, count = self.players.len() + 1, "added player");
        self.players.push(Player::new(id, name));
        Some(id)
    }

    /// Recompute villager as whatever the special roles leave over.
    fn resynchronize(&mut self) {
        let villagers = self
            .players
            .len()
            .saturating_sub(self.role_counts.special_total());
        self.role_counts[Role::Villager] = villagers;
        debug!(players = self.players.len(), villagers, "role counts resynchronized");
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RosterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterConfig")
            .field("players", &self.players)
            .field("role_counts", &self.role_counts)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
