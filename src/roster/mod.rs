//! Roster editing: players, auto-naming, and the role distribution.
//!
//! `RosterConfig` owns the player list and `RoleCounts` and keeps the
//! villager count in step with the number of players.

pub mod config;
pub mod counts;
pub mod naming;

pub use config::RosterConfig;
pub use counts::RoleCounts;
