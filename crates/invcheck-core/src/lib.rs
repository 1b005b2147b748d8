//! Core library for receipt verification.
//!
//! This crate provides:
//! - Tabular input normalization (tolerant schema, dedupe/trim/fill)
//! - OCR line extraction (noise classifier + two-strategy parser)
//! - Stable item identity and session-scoped verification state
//! - Progress aggregation and verified-column export

pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod session;
pub mod tabular;

pub use error::{CheckError, ExtractionError, Result, SchemaError};
pub use export::{export_rows, write_csv, ExportRow};
pub use extract::{extract_items, ExtractionOutcome, LineClassifier, LineSource, PlainTextSource};
pub use models::{CheckerConfig, Dataset, InvoiceItem, ItemId};
pub use session::{Progress, ReviewSession, VerificationStore};
pub use tabular::{normalize, Field, MissingCell, NormalizedTable, RawTable};
