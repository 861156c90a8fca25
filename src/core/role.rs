//! Hidden roles a player can be dealt.
//!
//! The set of roles is closed. Three of them are unique (at most one per
//! game); villagers and werewolves are unbounded.

use serde::{Deserialize, Serialize};

/// A hidden role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Villager,
    Werewolf,
    Fortuneteller,
    Witch,
    Amor,
}

impl Role {
    /// Every role, in table order.
    pub const ALL: [Role; 5] = [
        Role::Villager,
        Role::Werewolf,
        Role::Fortuneteller,
        Role::Witch,
        Role::Amor,
    ];

    /// Number of role variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Roles the user adjusts directly. Villager is derived from the rest.
    pub const SPECIAL: [Role; 4] = [
        Role::Werewolf,
        Role::Fortuneteller,
        Role::Witch,
        Role::Amor,
    ];

    /// Position of this role in [`Role::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Villager => "Villager",
            Role::Werewolf => "Werewolf",
            Role::Fortuneteller => "Fortune Teller",
            Role::Witch => "Witch",
            Role::Amor => "Amor",
        }
    }

    /// Whether at most one player per game may hold this role.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Role::Fortuneteller | Role::Witch | Role::Amor)
    }

    /// Parse a role from its lowercase identifier (`"werewolf"`, `"witch"`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "villager" => Some(Role::Villager),
            "werewolf" => Some(Role::Werewolf),
            "fortuneteller" | "seer" => Some(Role::Fortuneteller),
            "witch" => Some(Role::Witch),
            "amor" => Some(Role::Amor),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
