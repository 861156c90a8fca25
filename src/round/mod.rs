//! Dealing a round and revealing roles one player at a time.
//!
//! - `assigner`: turns a ready roster into a shuffled assignment
//! - `assignment`: the reveal state machine over that assignment

pub mod assigner;
pub mod assignment;

pub use assigner::RoundAssigner;
pub use assignment::{Progress, RevealPhase, RoundAssignment};
