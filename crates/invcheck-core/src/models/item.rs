//! Item and dataset models.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// A single purchase line on the receipt.
///
/// Produced once, by either the schema normalizer or the line parser, and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item name as it appears on the receipt, trimmed but otherwise
    /// verbatim.
    pub name: String,

    /// Quantity.
    pub qty: Decimal,

    /// Unit rate.
    pub rate: Decimal,

    /// Line value.
    pub value: Decimal,
}

impl InvoiceItem {
    pub fn new(name: impl Into<String>, qty: Decimal, rate: Decimal, value: Decimal) -> Self {
        Self {
            name: name.into(),
            qty,
            rate,
            value,
        }
    }
}

/// Stable, opaque identity of one dataset row.
///
/// Assigned from the canonical (pre-filter) sequence exactly once per
/// dataset load; search filtering never reassigns it. Verification state is
/// keyed on this, never on a filtered view's local row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

/// Ordered sequence of (identity, item) pairs in canonical order.
///
/// The dataset exclusively owns its items; the verification store only ever
/// references identities.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<(ItemId, InvoiceItem)>,
}

impl Dataset {
    /// Build a dataset from items in extraction/row order, assigning each
    /// its canonical position as identity.
    pub fn new(items: Vec<InvoiceItem>) -> Self {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (ItemId(i as u32), item))
            .collect();
        Self { entries }
    }

    /// Build from explicit pairs, rejecting duplicate identities.
    pub fn from_pairs(
        pairs: Vec<(ItemId, InvoiceItem)>,
    ) -> std::result::Result<Self, ExtractionError> {
        let mut seen = HashSet::new();
        for (id, _) in &pairs {
            if !seen.insert(*id) {
                return Err(ExtractionError::IdentityCollision(id.as_u32()));
            }
        }
        Ok(Self { entries: pairs })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &InvoiceItem)> {
        self.entries.iter().map(|(id, item)| (*id, item))
    }

    /// Look up an item by identity.
    pub fn get(&self, id: ItemId) -> Option<&InvoiceItem> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, item)| item)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Case-insensitive substring filter over the name field.
    ///
    /// Identities and canonical order are preserved in the view; an empty
    /// query yields the full dataset.
    pub fn filter<'a>(&'a self, query: &str) -> Vec<(ItemId, &'a InvoiceItem)> {
        let query = query.trim().to_lowercase();
        self.iter()
            .filter(|(_, item)| query.is_empty() || item.name.to_lowercase().contains(&query))
            .collect()
    }
}
