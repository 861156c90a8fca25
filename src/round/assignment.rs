//! A dealt round and its reveal sequence.
//!
//! ## Phases
//!
//! ```text
//! Revealing --advance (more players)--> Revealing
//! Revealing --advance (last player)---> Completed
//! Completed --restart-----------------> Revealing (cursor 0, same roles)
//! ```
//!
//! The player list is fixed when the round is dealt. Only the cursor and
//! the phase change.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Player, Role};

/// Where the reveal sequence stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPhase {
    /// Players are being shown their roles one at a time.
    #[default]
    Revealing,
    /// Every player has seen their role.
    Completed,
}

/// Reveal progress for display ("Player 2 of 6").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based position of the current player.
    pub position: usize,
    /// Players in the round.
    pub total: usize,
}

/// Players with their dealt roles, plus the reveal cursor.
///
/// Only built by [`RoundAssigner`](super::RoundAssigner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundAssignment {
    players: Vector<Player>,
    current_index: usize,
    phase: RevealPhase,
}

impl RoundAssignment {
    /// Start revealing `players` from the first one.
    ///
    /// Every player is expected to hold an assigned role.
    #[must_use]
    pub(crate) fn new(players: Vector<Player>) -> Self {
        Self {
            players,
            current_index: 0,
            phase: RevealPhase::Revealing,
        }
    }

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == RevealPhase::Completed
    }

    /// The player whose role is being revealed.
    ///
    /// `None` once the round is completed or if it has no players.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            RevealPhase::Revealing => self.players.get(self.current_index),
            RevealPhase::Completed => None,
        }
    }

    /// Whether the cursor is on the last player.
    #[must_use]
    pub fn is_last_player(&self) -> bool {
        self.current_index.saturating_add(1) >= self.players.len()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current_index.saturating_add(1),
            total: self.players.len(),
        }
    }

    /// Number of players holding `role`.
    #[must_use]
    pub fn count_of(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.role() == Some(role)).count()
    }

    /// Move to the next player, or complete the round after the last one.
    ///
    /// Returns false (and changes nothing) if the round is already completed.
    pub fn advance(&mut self) -> bool {
        if self.phase == RevealPhase::Completed {
            warn!("advance ignored: reveal already completed");
            return false;
        }

        if self.is_last_player() {
            self.phase = RevealPhase::Completed;
            debug!(players = self.players.len(), "reveal completed");
        } else {
            self.current_index += 1;
            debug!(position = self.current_index.saturating_add(1), total = self.players.len(), "next player");
        }
        true
    }

    /// Rewind to the first player with the same roles.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.phase = RevealPhase::Revealing;
        debug!("reveal restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdSource, SequentialIds};

    fn round(roles: &[Role]) -> RoundAssignment {
        let mut ids = SequentialIds::new();
        let players = roles
            .iter()
            .enumerate()
            .map(|(i, &role)| Player::new(ids.next_id(), format!("P{}", i + 1)).with_role(role))
            .collect();
        RoundAssignment::new(players)
    }

    #[test]
    fn test_starts_revealing_first_player() {
        let round = round(&[Role::Werewolf, Role::Villager, Role::Villager]);

        assert_eq!(round.phase(), RevealPhase::Revealing);
        assert_eq!(round.current_index(), 0);
        assert_eq!(round.current_player().map(|p| p.name.as_str()), Some("P1"));
        assert_eq!(round.progress(), Progress { position: 1, total: 3 });
        assert!(!round.is_last_player());
    }

    #[test]
    fn test_advance_through_round() {
        let mut round = round(&[Role::Werewolf, Role::Villager, Role::Villager]);

        assert!(round.advance());
        assert_eq!(round.current_index(), 1);
        assert!(round.advance());
        assert_eq!(round.current_index(), 2);
        assert!(round.is_last_player());
        assert_eq!(round.phase(), RevealPhase::Revealing);

        assert!(round.advance());
        assert!(round.is_completed());
        assert_eq!(round.current_index(), 2);
        assert!(round.current_player().is_none());
    }

    #[test]
    fn test_advance_after_completion_is_noop() {
        let mut round = round(&[Role::Villager, Role::Villager]);
        round.advance();
        round.advance();
        assert!(round.is_completed());

        let before = round.clone();
        assert!(!round.advance());
        assert_eq!(round, before);
    }

    #[test]
    fn test_restart_keeps_roles() {
        let mut round = round(&[Role::Witch, Role::Werewolf]);
        let roles: Vec<_> = round.players().iter().map(Player::role).collect();

        round.advance();
        round.advance();
        round.restart();

        assert_eq!(round.phase(), RevealPhase::Revealing);
        assert_eq!(round.current_index(), 0);
        let after: Vec<_> = round.players().iter().map(Player::role).collect();
        assert_eq!(roles, after);
    }

    #[test]
    fn test_empty_round() {
        let mut round = RoundAssignment::new(Vector::new());
        assert!(round.is_empty());
        assert!(round.current_player().is_none());
        assert!(round.is_last_player());

        assert!(round.advance());
        assert!(round.is_completed());
    }

    #[test]
    fn test_cursor_past_end_does_not_overflow() {
        let mut round = round(&[Role::Villager, Role::Werewolf]);
        round.current_index = usize::MAX;

        assert!(round.is_last_player());
        assert_eq!(round.progress(), Progress { position: usize::MAX, total: 2 });
        assert!(round.current_player().is_none());

        assert!(round.advance());
        assert!(round.is_completed());
    }

    #[test]
    fn test_count_of() {
        let round = round(&[Role::Werewolf, Role::Villager, Role::Werewolf]);
        assert_eq!(round.count_of(Role::Werewolf), 2);
        assert_eq!(round.count_of(Role::Villager), 1);
        assert_eq!(round.count_of(Role::Amor), 0);
    }

    #[test]
    fn test_phase_serde() {
        let json = serde_json::to_string(&RevealPhase::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
