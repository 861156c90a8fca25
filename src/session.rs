//! One device, one group: the configure → deal → reveal cycle.
//!
//! A `Session` owns the roster, the assigner, and at most one active
//! round. While a round is active the roster is frozen; ending the round
//! unfreezes it. Starting again deals a fresh shuffle, while restarting
//! replays the same roles from the first player.

use tracing::{debug, info, warn};

use crate::core::{AssignError, GameRng, Role, Shuffler};
use crate::round::{RoundAssigner, RoundAssignment};
use crate::roster::RosterConfig;

/// Roster plus the round currently being revealed, if any.
#[derive(Debug)]
pub struct Session<S: Shuffler = GameRng> {
    roster: RosterConfig,
    assigner: RoundAssigner<S>,
    round: Option<RoundAssignment>,
}

impl<S: Shuffler> Session<S> {
    pub fn new(roster: RosterConfig, assigner: RoundAssigner<S>) -> Self {
        Self {
            roster,
            assigner,
            round: None,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Mutable roster access, refused while a round is active.
    pub fn roster_mut(&mut self) -> Option<&mut RosterConfig> {
        if self.round.is_some() {
            debug!("roster is locked while a round is active");
            return None;
        }
        Some(&mut self.roster)
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundAssignment> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn in_round(&self) -> bool {
        self.round.is_some()
    }

    /// Deal a round from the current roster.
    pub fn start_round(&mut self) -> Result<&RoundAssignment, AssignError> {
        if self.round.is_some() {
            return Err(AssignError::RoundInProgress);
        }
        let round = self.assigner.start(&self.roster)?;
        Ok(&*self.round.insert(round))
    }

    /// Throw away the active round and deal a new shuffle from the same roster.
    pub fn reshuffle_round(&mut self) -> Result<&RoundAssignment, AssignError> {
        let round = self.assigner.start(&self.roster)?;
        info!("round reshuffled");
        Ok(&*self.round.insert(round))
    }

    /// Reveal the next player. False if there is no round or it is completed.
    pub fn advance(&mut self) -> bool {
        match self.round.as_mut() {
            Some(round) => round.advance(),
            None => {
                warn!("advance ignored: no active round");
                false
            }
        }
    }

    /// Replay the reveal of the active round from the first player.
    pub fn restart_round(&mut self) -> bool {
        match self.round.as_mut() {
            Some(round) => {
                round.restart();
                true
            }
            None => {
                warn!("restart ignored: no active round");
                false
            }
        }
    }

    /// Discard the active round and return to editing the roster.
    pub fn end_round(&mut self) -> Option<RoundAssignment> {
        let round = self.round.take();
        if round.is_some() {
            info!("round ended");
        }
        round
    }

    /// Add one `role` to the roster. False while a round is active.
    pub fn increment(&mut self, role: Role) -> bool {
        self.roster_mut().is_some_and(|r| r.increment(role))
    }

    /// Remove one `role` from the roster. False while a round is active.
    pub fn decrement(&mut self, role: Role) -> bool {
        self.roster_mut().is_some_and(|r| r.decrement(role))
    }
}

impl Session<GameRng> {
    /// Default roster and an entropy-seeded assigner.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RosterConfig::new(), RoundAssigner::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedPermutation, RosterSettings, SequentialIds};
    use crate::round::RevealPhase;

    fn session(players: usize) -> Session<FixedPermutation> {
        let roster = RosterConfig::with_settings(
            RosterSettings::new().with_initial_players(players),
            SequentialIds::new(),
        );
        Session::new(roster, RoundAssigner::new(FixedPermutation::identity(players)))
    }

    #[test]
    fn test_round_locks_roster() {
        let mut session = session(3);
        assert!(session.roster_mut().is_some());

        session.start_round().unwrap();
        assert!(session.in_round());
        assert!(session.roster_mut().is_none());
        assert!(!session.increment(Role::Werewolf));
        assert!(!session.decrement(Role::Werewolf));
        assert_eq!(session.roster().role_counts()[Role::Werewolf], 0);

        session.end_round();
        assert!(!session.in_round());
        assert!(session.increment(Role::Werewolf));
    }

    #[test]
    fn test_start_twice_is_refused() {
        let mut session = session(2);
        session.start_round().unwrap();
        assert_eq!(session.start_round().err(), Some(AssignError::RoundInProgress));
    }

    #[test]
    fn test_advance_and_restart() {
        let mut session = session(2);
        assert!(!session.advance());
        assert!(!session.restart_round());

        session.start_round().unwrap();
        assert!(session.advance());
        assert!(session.advance());
        assert_eq!(session.round().map(RoundAssignment::phase), Some(RevealPhase::Completed));
        assert!(!session.advance());

        assert!(session.restart_round());
        let round = session.round().unwrap();
        assert_eq!(round.phase(), RevealPhase::Revealing);
        assert_eq!(round.current_index(), 0);
    }

    #[test]
    fn test_reshuffle_replaces_round() {
        let mut session = session(2);
        session.start_round().unwrap();
        session.advance();

        let round = session.reshuffle_round().unwrap();
        assert_eq!(round.current_index(), 0);
        assert_eq!(round.phase(), RevealPhase::Revealing);
    }

    #[test]
    fn test_start_not_ready() {
        let mut session = session(2);
        session.roster_mut().unwrap().remove_players([0]);

        assert!(matches!(session.start_round(), Err(AssignError::NotReady { .. })));
        assert!(!session.in_round());
    }
}
