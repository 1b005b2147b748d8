//! Review session: explicit event handlers over externally held state.
//!
//! The whole pipeline is single-threaded and synchronous; every handler
//! runs to completion before the next user interaction is consumed. The
//! verification store survives across interactions but a new dataset load
//! is a hard cancellation point for all derived state.

pub mod aggregate;
pub mod store;

pub use aggregate::Progress;
pub use store::VerificationStore;

use tracing::info;

use crate::error::Result;
use crate::export::ExportRow;
use crate::extract::{extract_items, LineSource};
use crate::models::{CheckerConfig, Dataset, InvoiceItem, ItemId};
use crate::tabular::{normalize, MissingCell, RawTable};

/// One review session over a single uploaded dataset.
pub struct ReviewSession {
    config: CheckerConfig,
    dataset: Dataset,
    store: VerificationStore,
    unparsed: Vec<String>,
    missing_cells: Vec<MissingCell>,
    query: String,
}

impl ReviewSession {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config,
            dataset: Dataset::default(),
            store: VerificationStore::new(),
            unparsed: Vec::new(),
            missing_cells: Vec::new(),
            query: String::new(),
        }
    }

    /// Discard all state derived from the previous upload.
    fn begin_load(&mut self) {
        self.dataset = Dataset::default();
        self.store.reset();
        self.unparsed.clear();
        self.missing_cells.clear();
        self.query.clear();
    }

    /// Load a tabular upload. A schema failure leaves the session empty.
    pub fn load_table(&mut self, table: &RawTable) -> Result<()> {
        self.begin_load();

        let normalized = normalize(table, &self.config.cleaning)?;
        self.dataset = Dataset::new(normalized.items);
        self.missing_cells = normalized.missing_cells;

        if self.config.cleaning.seed_verified {
            for (id, verified) in self.dataset.ids().zip(normalized.verified_seed) {
                if verified {
                    self.store.set(id, true);
                }
            }
        }

        info!("loaded tabular dataset with {} items", self.dataset.len());
        Ok(())
    }

    /// Load from the OCR collaborator's text lines.
    pub fn load_lines(&mut self, lines: &[String]) -> Result<()> {
        self.begin_load();

        let outcome = extract_items(lines, &self.config.extraction)?;
        self.dataset = Dataset::new(outcome.items);
        self.unparsed = outcome.unparsed;

        info!(
            "loaded OCR dataset with {} items, {} unparsed lines",
            self.dataset.len(),
            self.unparsed.len()
        );
        Ok(())
    }

    /// Load by pulling lines from a [`LineSource`] collaborator.
    pub fn load_source<S: LineSource>(&mut self, source: &mut S) -> Result<()> {
        let lines = source.lines()?;
        self.load_lines(&lines)
    }

    /// Replace the active search query.
    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Flip one item's verified flag; returns the new state.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        self.store.toggle(id)
    }

    /// Bulk assignment over every item in the dataset.
    pub fn mark_all(&mut self, verified: bool) {
        for id in self.dataset.ids().collect::<Vec<_>>() {
            self.store.set(id, verified);
        }
    }

    /// Items matching the current query, identities intact.
    pub fn visible(&self) -> Vec<(ItemId, &InvoiceItem)> {
        self.dataset.filter(&self.query)
    }

    /// Fresh progress counts.
    pub fn progress(&self) -> Progress {
        Progress::compute(&self.dataset, &self.store)
    }

    /// Export rows in canonical order with verification attached.
    pub fn export(&self) -> Vec<ExportRow> {
        crate::export::export_rows(&self.dataset, &self.store.snapshot())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn store(&self) -> &VerificationStore {
        &self.store
    }

    /// Lines the parser could not handle, for manual inspection.
    pub fn unparsed_lines(&self) -> &[String] {
        &self.unparsed
    }

    /// Numeric cells left unfilled because the fill step was disabled.
    pub fn missing_cells(&self) -> &[MissingCell] {
        &self.missing_cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheckError, ExtractionError};
    use pretty_assertions::assert_eq;

    fn session() -> ReviewSession {
        ReviewSession::new(CheckerConfig::default())
    }

    fn ocr_lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_toggle_in_filtered_view_hits_canonical_identity() {
        let mut s = session();
        s.load_lines(&ocr_lines(&[
            "Milk Packet 1 25.00 25.00",
            "Bread Loaf 1 30.00 30.00",
            "Buttermilk 2 10.00 20.00",
        ]))
        .unwrap();

        s.search("buttermilk");
        let view = s.visible();
        assert_eq!(view.len(), 1);
        let (id, item) = view[0];
        assert_eq!(item.name, "Buttermilk");

        s.toggle(id);

        // Clearing the filter shows the same identity verified.
        s.search("");
        assert!(s.store().get(ItemId::from(2)));
        assert!(!s.store().get(ItemId::from(0)));
        assert_eq!(s.progress().verified, 1);
    }

    #[test]
    fn test_reload_resets_verification_state() {
        let mut s = session();
        s.load_lines(&ocr_lines(&["Milk Packet 1 25.00 25.00"])).unwrap();
        s.toggle(ItemId::from(0));
        assert_eq!(s.progress().verified, 1);

        // Second upload must not retain stale identities.
        s.load_lines(&ocr_lines(&[
            "Bread Loaf 1 30.00 30.00",
            "Eggs Dozen 1 72.00 72.00",
        ]))
        .unwrap();
        assert_eq!(s.progress().verified, 0);
        assert_eq!(s.progress().total, 2);
    }

    #[test]
    fn test_verified_column_seeds_store() {
        let table = RawTable {
            headers: vec!["Item", "Qty", "Rate", "Value", "Verified"]
                .into_iter()
                .map(String::from)
                .collect(),
            rows: vec![
                vec!["Milk", "1", "25", "25", "true"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                vec!["Bread", "1", "30", "30", "false"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ],
        };

        let mut s = session();
        s.load_table(&table).unwrap();
        assert!(s.store().get(ItemId::from(0)));
        assert!(!s.store().get(ItemId::from(1)));
        assert_eq!(s.progress().remaining, 1);
    }

    #[test]
    fn test_empty_extraction_leaves_session_empty() {
        let mut s = session();
        s.load_lines(&ocr_lines(&["Milk Packet 1 25.00 25.00"])).unwrap();

        let err = s.load_lines(&ocr_lines(&["TOTAL 135.00"])).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Extraction(ExtractionError::EmptyExtraction { .. })
        ));
        assert!(s.dataset().is_empty());
        assert_eq!(s.progress().total, 0);
    }

    #[test]
    fn test_mark_all_then_toggle() {
        let mut s = session();
        s.load_lines(&ocr_lines(&[
            "Milk Packet 1 25.00 25.00",
            "Bread Loaf 1 30.00 30.00",
        ]))
        .unwrap();

        s.mark_all(true);
        assert!(s.progress().all_verified());

        s.toggle(ItemId::from(1));
        let p = s.progress();
        assert_eq!(p.verified, 1);
        assert_eq!(p.remaining, 1);
    }

    #[test]
    fn test_fill_disabled_surfaces_missing_cells() {
        let mut config = CheckerConfig::default();
        config.cleaning.fill_missing = false;

        let table = RawTable {
            headers: vec!["Item".to_string(), "Qty".to_string()],
            rows: vec![vec!["Sugar".to_string(), String::new()]],
        };

        let mut s = ReviewSession::new(config);
        s.load_table(&table).unwrap();
        assert_eq!(s.missing_cells().len(), 1);
        assert_eq!(s.progress().total, 1);
    }

    #[test]
    fn test_unparsed_lines_surfaced_on_demand() {
        let mut s = session();
        s.load_lines(&ocr_lines(&["Milk Packet 1 25.00 25.00", "Rice Bag"]))
            .unwrap();
        assert_eq!(s.unparsed_lines(), &["Rice Bag".to_string()]);
    }
}
