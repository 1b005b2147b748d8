//! Review progress counts.

use crate::models::Dataset;

use super::store::VerificationStore;

/// Aggregate counts over the current dataset and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub verified: usize,
    pub remaining: usize,
}

impl Progress {
    /// Recompute counts from scratch. Never cached, so a dataset reload
    /// cannot leave stale totals behind.
    pub fn compute(dataset: &Dataset, store: &VerificationStore) -> Self {
        let total = dataset.len();
        let verified = dataset.ids().filter(|id| store.get(*id)).count();
        Self {
            total,
            verified,
            remaining: total - verified,
        }
    }

    pub fn all_verified(&self) -> bool {
        self.remaining == 0
    }
}
