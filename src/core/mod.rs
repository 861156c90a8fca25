//! Core types: player identity, roles, players, randomness, settings, errors.
//!
//! The roster and round modules build on these; nothing here holds
//! mutable game state.

pub mod entity;
pub mod role;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{IdSource, PlayerId, RandomIds, SequentialIds};
pub use role::Role;
pub use player::{Player, RoleSlot};
pub use rng::{FixedPermutation, GameRng, Shuffler};
pub use config::RosterSettings;
pub use error::AssignError;
