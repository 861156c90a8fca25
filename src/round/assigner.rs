//! Dealing roles to a roster.
//!
//! `RoundAssigner::start` snapshots a ready roster into a
//! [`RoundAssignment`]:
//!
//! 1. Expand the role counts into a pool (each role repeated `count` times).
//! 2. Reorder the pool with a permutation from the injected [`Shuffler`].
//! 3. Give pool slot `i` to the player at position `i`.
//!
//! Players beyond the end of the pool get [`Role::Villager`]. A ready
//! roster never has such players, but the fallback keeps dealing total.

use im::Vector;
use tracing::{error, info};

use super::assignment::RoundAssignment;
use crate::core::rng::is_permutation;
use crate::core::{AssignError, GameRng, Player, Role, Shuffler};
use crate::roster::RosterConfig;

/// Deals roles using an injected source of permutations.
#[derive(Clone, Debug)]
pub struct RoundAssigner<S: Shuffler = GameRng> {
    shuffler: S,
}

impl RoundAssigner<GameRng> {
    /// Assigner seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Assigner with a fixed seed, for reproducible deals.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<S: Shuffler> RoundAssigner<S> {
    pub fn new(shuffler: S) -> Self {
        Self { shuffler }
    }

    /// Deal a new round from `config`.
    ///
    /// Fails with [`AssignError::NotReady`] unless
    /// [`RosterConfig::can_start_game`] holds, and with
    /// [`AssignError::InvalidPermutation`] if the shuffler misbehaves.
    pub fn start(&mut self, config: &RosterConfig) -> Result<RoundAssignment, AssignError> {
        if !config.can_start_game() {
            let err = AssignError::NotReady {
                players: config.players().len(),
                assigned: config.total_assigned(),
                min_players: config.settings().effective_min_players(),
            };
            error!(%err, "refusing to deal roles");
            return Err(err);
        }

        let pool = config.role_counts().pool();
        let order = self.shuffler.permutation(pool.len());
        if !is_permutation(&order, pool.len()) {
            let err = AssignError::InvalidPermutation { pool: pool.len() };
            error!(%err, ?order, "refusing to deal roles");
            return Err(err);
        }

        let players = deal(config.players(), &pool, &order);
        info!(players = players.len(), "roles dealt");
        Ok(RoundAssignment::new(players))
    }
}

/// Give `pool[order[i]]` to `players[i]`.
///
/// Players past the end of `order` get [`Role::Villager`]. `order` must
/// only hold indices into `pool`.
fn deal(players: &[Player], pool: &[Role], order: &[usize]) -> Vector<Player> {
    players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let role = order
                .get(i)
                .and_then(|&slot| pool.get(slot))
                .copied()
                .unwrap_or(Role::Villager);
            player.with_role(role)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedPermutation, RosterSettings, SequentialIds};
    use crate::round::RevealPhase;

    fn roster(players: usize) -> RosterConfig {
        RosterConfig::with_settings(
            RosterSettings::new().with_initial_players(players),
            SequentialIds::new(),
        )
    }

    fn roles(round: &RoundAssignment) -> Vec<Role> {
        round.players().iter().filter_map(|p| p.role()).collect()
    }

    #[test]
    fn test_identity_deals_in_table_order() {
        let mut config = roster(4);
        config.increment(Role::Werewolf);
        config.increment(Role::Witch);

        let mut assigner = RoundAssigner::new(FixedPermutation::identity(4));
        let round = assigner.start(&config).unwrap();

        assert_eq!(
            roles(&round),
            vec![Role::Villager, Role::Villager, Role::Werewolf, Role::Witch]
        );
        assert_eq!(round.phase(), RevealPhase::Revealing);
        assert_eq!(round.current_index(), 0);
    }

    #[test]
    fn test_fixed_permutation_is_applied() {
        let mut config = roster(3);
        config.increment(Role::Werewolf);

        // Pool is [Villager, Villager, Werewolf]; put the werewolf first.
        let mut assigner = RoundAssigner::new(FixedPermutation(vec![2, 0, 1]));
        let round = assigner.start(&config).unwrap();

        assert_eq!(roles(&round), vec![Role::Werewolf, Role::Villager, Role::Villager]);
    }

    #[test]
    fn test_players_keep_order_and_identity() {
        let config = roster(3);
        let mut assigner = RoundAssigner::seeded(1);
        let round = assigner.start(&config).unwrap();

        let expected: Vec<_> = config.players().iter().map(|p| (p.id(), p.name.clone())).collect();
        let actual: Vec<_> = round.players().iter().map(|p| (p.id(), p.name.clone())).collect();
        assert_eq!(expected, actual);

        // The roster itself stays unassigned.
        assert!(config.players().iter().all(|p| p.role().is_none()));
    }

    #[test]
    fn test_not_ready() {
        let mut config = roster(2);
        config.remove_players([0]);

        let mut assigner = RoundAssigner::seeded(1);
        assert_eq!(
            assigner.start(&config),
            Err(AssignError::NotReady {
                players: 1,
                assigned: 1,
                min_players: 2,
            })
        );
    }

    #[test]
    fn test_invalid_permutation() {
        let config = roster(3);
        let mut assigner = RoundAssigner::new(FixedPermutation(vec![0, 0, 1]));
        assert_eq!(
            assigner.start(&config),
            Err(AssignError::InvalidPermutation { pool: 3 })
        );

        let mut assigner = RoundAssigner::new(FixedPermutation(vec![0, 1]));
        assert_eq!(
            assigner.start(&config),
            Err(AssignError::InvalidPermutation { pool: 3 })
        );
    }

    #[test]
    fn test_deal_short_pool_falls_back_to_villager() {
        let config = roster(4);
        let pool = [Role::Werewolf, Role::Witch];

        let players = deal(config.players(), &pool, &[1, 0]);

        let dealt: Vec<_> = players.iter().map(|p| p.role()).collect();
        assert_eq!(
            dealt,
            vec![
                Some(Role::Witch),
                Some(Role::Werewolf),
                Some(Role::Villager),
                Some(Role::Villager),
            ]
        );
    }

    #[test]
    fn test_one_player_minimum_still_needs_two() {
        let config = RosterConfig::with_settings(
            RosterSettings::new().with_initial_players(1).with_min_players(1),
            SequentialIds::new(),
        );
        assert!(!config.can_start_game());
        assert!(matches!(
            RoundAssigner::seeded(1).start(&config),
            Err(AssignError::NotReady { players: 1, min_players: 2, .. })
        ));
    }

    #[test]
    fn test_deserialized_zero_minimum_deals_nothing() {
        let settings: RosterSettings = serde_json::from_str(
            r#"{"name_prefix":"Player","initial_players":0,"min_players":0}"#,
        )
        .unwrap();
        let config = RosterConfig::with_settings(settings, SequentialIds::new());

        assert!(!config.can_start_game());
        assert!(RoundAssigner::seeded(1).start(&config).is_err());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut config = roster(8);
        config.increment(Role::Werewolf);
        config.increment(Role::Werewolf);
        config.increment(Role::Fortuneteller);

        let a = RoundAssigner::seeded(42).start(&config).unwrap();
        let b = RoundAssigner::seeded(42).start(&config).unwrap();
        assert_eq!(roles(&a), roles(&b));
    }

    #[test]
    fn test_role_multiset_matches_counts() {
        let mut config = roster(7);
        config.increment(Role::Werewolf);
        config.increment(Role::Werewolf);
        config.increment(Role::Amor);

        let mut assigner = RoundAssigner::seeded(9);
        for _ in 0..20 {
            let round = assigner.start(&config).unwrap();
            for (role, count) in config.role_counts().iter() {
                assert_eq!(round.count_of(role), count);
            }
        }
    }
}
