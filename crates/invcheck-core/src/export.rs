//! Exporter: dataset plus verification column, canonical order.

use std::collections::HashMap;
use std::io::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Dataset, ItemId};
use crate::session::VerificationStore;
use crate::tabular::Field;

/// One exported row. Items with no store entry export as unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Particulars")]
    pub particulars: String,
    #[serde(rename = "Qty")]
    pub qty: Decimal,
    #[serde(rename = "Rate")]
    pub rate: Decimal,
    #[serde(rename = "Value")]
    pub value: Decimal,
    #[serde(rename = "Verified")]
    pub verified: bool,
}

/// Serialize the dataset against a store snapshot. No identity or state is
/// recomputed here.
pub fn export_rows(dataset: &Dataset, snapshot: &HashMap<ItemId, bool>) -> Vec<ExportRow> {
    dataset
        .iter()
        .map(|(id, item)| ExportRow {
            particulars: item.name.clone(),
            qty: item.qty,
            rate: item.rate,
            value: item.value,
            verified: snapshot.get(&id).copied().unwrap_or(false),
        })
        .collect()
}

/// Write rows as CSV with canonical headers.
///
/// The header row is always emitted, even for an empty dataset.
pub fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record([
        Field::Particulars.header(),
        Field::Qty.header(),
        Field::Rate.header(),
        Field::Value.header(),
        Field::Verified.header(),
    ])?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Convenience over a live store.
pub fn export_with_store(dataset: &Dataset, store: &VerificationStore) -> Vec<ExportRow> {
    export_rows(dataset, &store.snapshot())
}
