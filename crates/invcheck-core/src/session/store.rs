//! Session-scoped verification state.

use std::collections::HashMap;

use crate::models::ItemId;

/// Mapping from item identity to its verified flag.
///
/// Lives for one review session: created empty on dataset load, mutated
/// only through [`toggle`](VerificationStore::toggle) and
/// [`set`](VerificationStore::set), and wiped by
/// [`reset`](VerificationStore::reset) when a new dataset replaces the
/// current one. Entries are never removed otherwise.
#[derive(Debug, Clone, Default)]
pub struct VerificationStore {
    flags: HashMap<ItemId, bool>,
}

impl VerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for an identity, treating an absent entry as false.
    /// Applying twice restores the prior state.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Explicit assignment, used by bulk marking and verified-column seeds.
    pub fn set(&mut self, id: ItemId, verified: bool) {
        self.flags.insert(id, verified);
    }

    pub fn get(&self, id: ItemId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Point-in-time copy of the mapping.
    pub fn snapshot(&self) -> HashMap<ItemId, bool> {
        self.flags.clone()
    }

    /// Wipe all state. Called on every new dataset load so stale
    /// identities never collide with the new dataset's.
    pub fn reset(&mut self) {
        self.flags.clear();
    }

    /// Count of identities currently flagged verified.
    pub fn verified_count(&self) -> usize {
        self.flags.values().filter(|v| **v).count()
    }
}
