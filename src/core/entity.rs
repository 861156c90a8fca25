//! Player identity.
//!
//! Every player gets a `PlayerId` when added to the roster. The id is
//! opaque and stays stable for the player's lifetime, independent of the
//! player's position in the list or display name.
//!
//! ## Id Sources
//!
//! Ids come from an injected [`IdSource`]:
//! - [`RandomIds`]: UUID v4, the default.
//! - [`SequentialIds`]: a counter, for deterministic tests and replays.
//!
//! ```
//! use werwolf::core::{IdSource, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Generator of fresh player ids.
pub trait IdSource {
    /// Produce an id never returned before by this source.
    fn next_id(&mut self) -> PlayerId;
}

/// Random UUID v4 ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> PlayerId {
        PlayerId(Uuid::new_v4())
    }
}

/// Deterministic ids: 1, 2, 3, ... encoded as UUIDs.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start counting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start counting at `first`.
    #[must_use]
    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for Box<T> {
    fn next_id(&mut self) -> PlayerId {
        (**self).next_id()
    }
}
