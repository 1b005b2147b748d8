//! Schema normalizer for already-tabular input.
//!
//! Canonicalizes column names, applies the configured cleaning steps
//! (dedupe, trim, fill) in order, and produces the item list plus the
//! optional verified-column seed.

use std::collections::HashSet;
use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::models::{CleaningConfig, InvoiceItem};

use super::schema::{ColumnMap, Field};

/// Raw tabular input before normalization.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Read a CSV document into a raw table.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }
}

/// A numeric cell that was empty and left unfilled because the fill step
/// is disabled. The value defaults to zero either way; this report is what
/// makes the difference visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCell {
    pub row: usize,
    pub field: Field,
}

/// Normalized output: items in row order plus the verified seed read from
/// a pre-existing verified column (all false when the column is absent).
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub items: Vec<InvoiceItem>,
    pub verified_seed: Vec<bool>,
    /// Empty numeric cells encountered while the fill step was disabled.
    pub missing_cells: Vec<MissingCell>,
}

/// Normalize a raw table under the given cleaning options.
///
/// Fails with [`SchemaError::MissingNameColumn`] when no particulars/item
/// column resolves; this halts the upload.
pub fn normalize(
    table: &RawTable,
    config: &CleaningConfig,
) -> Result<NormalizedTable, SchemaError> {
    // Header resolution is always case/whitespace tolerant, independent of
    // the trim toggle which only affects cell values.
    let columns = ColumnMap::from_headers(&table.headers);

    let name_col = columns.particulars.ok_or_else(|| SchemaError::MissingNameColumn {
        columns: table.headers.iter().map(|h| h.trim().to_string()).collect(),
    })?;

    let mut rows: Vec<Vec<String>> = table.rows.clone();

    if config.drop_duplicates {
        let before = rows.len();
        let mut seen = HashSet::new();
        rows.retain(|row| seen.insert(row.clone()));
        debug!("dropped {} duplicate rows", before - rows.len());
    }

    // The only place cell whitespace is removed; with the toggle off,
    // cells pass through verbatim.
    if config.trim_whitespace {
        for row in &mut rows {
            for cell in row.iter_mut() {
                *cell = cell.trim().to_string();
            }
        }
    }

    let mut out = NormalizedTable {
        items: Vec::with_capacity(rows.len()),
        verified_seed: Vec::with_capacity(rows.len()),
        missing_cells: Vec::new(),
    };

    for (row_idx, row) in rows.iter().enumerate() {
        let name = row.get(name_col).map(String::as_str).unwrap_or("");

        let qty = numeric_cell(row, columns.qty, Field::Qty, row_idx, config, &mut out);
        let rate = numeric_cell(row, columns.rate, Field::Rate, row_idx, config, &mut out);
        let value = numeric_cell(row, columns.value, Field::Value, row_idx, config, &mut out);

        out.items.push(InvoiceItem::new(name, qty, rate, value));
        out.verified_seed.push(
            columns
                .verified
                .and_then(|c| row.get(c))
                .map(|cell| parse_bool(cell))
                .unwrap_or(false),
        );
    }

    Ok(out)
}

fn numeric_cell(
    row: &[String],
    col: Option<usize>,
    field: Field,
    row_idx: usize,
    config: &CleaningConfig,
    out: &mut NormalizedTable,
) -> Decimal {
    // An absent column is synthesized as zero outright; the missing-cell
    // report covers only gaps in a column that does exist.
    let Some(cell) = col.and_then(|c| row.get(c)).map(String::as_str) else {
        return Decimal::ZERO;
    };
    if cell.is_empty() {
        if !config.fill_missing {
            warn!("row {}: missing {} cell", row_idx, field.header());
            out.missing_cells.push(MissingCell {
                row: row_idx,
                field,
            });
        }
        return Decimal::ZERO;
    }
    match Decimal::from_str(cell) {
        Ok(v) => v,
        Err(_) => {
            warn!(
                "row {}: unparsable {} cell {:?}, using 0",
                row_idx,
                field.header(),
                cell
            );
            Decimal::ZERO
        }
    }
}

fn parse_bool(cell: &str) -> bool {
    matches!(
        cell.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "t"
    )
}
