//! How many of each role is in play.
//!
//! `RoleCounts` always has an entry for every role; zero is the default.
//! It is a plain fixed-size table: the roster decides when counts may
//! change, this type only stores them.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::Role;

/// Role → count table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleCounts {
    counts: [usize; Role::COUNT],
}

impl RoleCounts {
    /// All counts zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, role: Role) -> usize {
        self.counts[role.index()]
    }

    /// Sum over all roles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Sum over every role except villager.
    #[must_use]
    pub fn special_total(&self) -> usize {
        Role::SPECIAL.iter().map(|&r| self.get(r)).sum()
    }

    /// Iterate over (Role, count) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        Role::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    /// Expand into a pool holding each role `count` times, in table order.
    #[must_use]
    pub fn pool(&self) -> Vec<Role> {
        let mut pool = Vec::with_capacity(self.total());
        for (role, count) in self.iter() {
            pool.extend(std::iter::repeat(role).take(count));
        }
        pool
    }
}

impl Index<Role> for RoleCounts {
    type Output = usize;

    fn index(&self, role: Role) -> &Self::Output {
        &self.counts[role.index()]
    }
}

impl IndexMut<Role> for RoleCounts {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        &mut self.counts[role.index()]
    }
}
