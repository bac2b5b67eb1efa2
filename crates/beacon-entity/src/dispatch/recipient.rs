//! Deduplicated recipient collection.

use std::collections::HashSet;

use beacon_core::types::UserId;

use crate::user::User;

/// A set of notifiable users deduplicated by id.
///
/// A user satisfying several resolution criteria (geo radius and the
/// emergency-personnel override, say) appears exactly once. Insertion
/// order is preserved.
#[derive(Debug, Default)]
pub struct RecipientSet {
    seen: HashSet<UserId>,
    users: Vec<User>,
}

impl RecipientSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user. Returns `false` if the id was already present.
    pub fn insert(&mut self, user: User) -> bool {
        if self.seen.insert(user.id) {
            self.users.push(user);
            true
        } else {
            false
        }
    }

    /// Insert every user from an iterator, skipping duplicates.
    pub fn extend(&mut self, users: impl IntoIterator<Item = User>) {
        for user in users {
            self.insert(user);
        }
    }

    /// Number of distinct recipients.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over the recipients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Consume the set, yielding the recipients in insertion order.
    pub fn into_vec(self) -> Vec<User> {
        self.users
    }
}

impl IntoIterator for RecipientSet {
    type Item = User;
    type IntoIter = std::vec::IntoIter<User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_iter()
    }
}
