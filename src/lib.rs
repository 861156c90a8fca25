//! # werwolf
//!
//! Roster setup, role dealing, and one-at-a-time role reveal for Werewolf
//! party games played on a single shared device.
//!
//! ## Design Principles
//!
//! 1. **Always Consistent**: Role counts are re-synchronized with the
//!    roster after every edit, not checked once at start time.
//!
//! 2. **Injected Randomness**: Ids and shuffles come from `IdSource` and
//!    `Shuffler`, so tests and replays can be fully deterministic.
//!
//! 3. **No Presentation Logic**: Phases change only on explicit calls.
//!    Timers, animations, and text formatting belong to the caller.
//!
//! ## Flow
//!
//! `RosterConfig` collects players and role counts → `RoundAssigner`
//! deals a `RoundAssignment` → `advance()` walks the reveal until it is
//! completed → the round is restarted, reshuffled, or discarded.
//! `Session` ties the three together.
//!
//! ## Modules
//!
//! - `core`: Player ids, roles, players, randomness, settings, errors
//! - `roster`: Editable player list and role counts
//! - `round`: Role dealing and the reveal state machine
//! - `session`: Configure/deal/reveal cycle

pub mod core;
pub mod roster;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AssignError, FixedPermutation, GameRng, IdSource, Player, PlayerId, RandomIds, Role,
    RoleSlot, RosterSettings, SequentialIds, Shuffler,
};

pub use crate::roster::{RoleCounts, RosterConfig};

pub use crate::round::{Progress, RevealPhase, RoundAssigner, RoundAssignment};

pub use crate::session::Session;
