//! Error types for starting a round.
//!
//! Roster edits never fail: invalid arguments are ignored and logged.
//! Only dealing roles can be refused.

/// Errors returned when a round cannot be dealt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// The roster is too small or its role counts do not add up.
    #[error("roster not ready: {players} players (minimum {min_players}), {assigned} roles assigned")]
    NotReady {
        players: usize,
        assigned: usize,
        min_players: usize,
    },

    /// The injected shuffler returned something other than a permutation of the pool.
    #[error("shuffler returned an invalid permutation for a pool of {pool} roles")]
    InvalidPermutation { pool: usize },

    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}
