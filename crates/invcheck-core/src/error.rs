//! Error types for the invcheck-core library.

use thiserror::Error;

/// Main error type for the invcheck library.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Tabular schema error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Line extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to tabular input. Fatal for the current upload: the
/// pipeline halts rather than producing an empty dataset silently.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// No particulars/item column resolved after header normalization.
    #[error("no particulars/item column found (columns present: {})", .columns.join(", "))]
    MissingNameColumn { columns: Vec<String> },
}

/// Errors related to OCR line extraction.
///
/// Per-line parse failures are not errors; they are collected as unparsed
/// lines and surfaced only on demand.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No line survived classification and parsing. Carries the raw
    /// collaborator output so it can be shown for manual review.
    #[error("no items could be extracted from {} lines", .raw_lines.len())]
    EmptyExtraction { raw_lines: Vec<String> },

    /// Two items resolved to the same identity. Indicates a resolver
    /// defect, never a data defect.
    #[error("duplicate identity {0} in dataset")]
    IdentityCollision(u32),
}

/// Result type for the invcheck library.
pub type Result<T> = std::result::Result<T, CheckError>;
