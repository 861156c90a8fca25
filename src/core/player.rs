//! Players and their (possibly not yet dealt) roles.
//!
//! A player is created unassigned when added to the roster. Starting a
//! round copies the roster and fills in `RoleSlot::Assigned` on each copy;
//! the roster's own players stay unassigned.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Role};

/// Role held by a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "role", rename_all = "lowercase")]
pub enum RoleSlot {
    /// No round has dealt a role yet.
    #[default]
    Unassigned,
    /// Role dealt for the current round.
    Assigned(Role),
}

impl RoleSlot {
    /// The dealt role, if any.
    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            RoleSlot::Unassigned => None,
            RoleSlot::Assigned(role) => Some(role),
        }
    }
}

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    /// Display name. Free-form; not required to be unique.
    pub name: String,
    role: RoleSlot,
}

impl Player {
    /// Create an unassigned player.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: RoleSlot::Unassigned,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The dealt role, or `None` before a round starts.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.role()
    }

    /// Copy of this player holding `role`.
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            role: RoleSlot::Assigned(role),
        }
    }
}
