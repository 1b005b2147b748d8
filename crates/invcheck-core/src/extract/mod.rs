//! OCR line extraction: classification, parsing, and the collaborator seam.

pub mod classifier;
pub mod parser;

pub use classifier::{LineClassifier, SKIP_WORDS};
pub use parser::{parse_amount, parse_line};

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::{InvoiceItem, LineConfig};

/// Source of receipt text lines.
///
/// The OCR engine itself is an external collaborator; all the core consumes
/// is an ordered sequence of text lines per image.
pub trait LineSource {
    /// Return detected lines in reading order.
    fn lines(&mut self) -> Result<Vec<String>, ExtractionError>;
}

/// Line source over an already-captured OCR text dump, one line per row.
pub struct PlainTextSource {
    text: String,
}

impl PlainTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for PlainTextSource {
    fn lines(&mut self) -> Result<Vec<String>, ExtractionError> {
        Ok(self
            .text
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }
}

/// Outcome of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutcome {
    /// Structured items in line order.
    pub items: Vec<InvoiceItem>,
    /// Non-noise lines that failed both parse strategies, for manual
    /// inspection.
    pub unparsed: Vec<String>,
    /// Count of lines dropped as noise.
    pub noise_count: usize,
}

/// Run classification then parsing over the collaborator's lines.
///
/// Per-line failures never abort the run; they land in `unparsed`. Fails
/// with [`ExtractionError::EmptyExtraction`] only when no line at all
/// produced an item, carrying the raw lines for manual review.
pub fn extract_items(
    lines: &[String],
    config: &LineConfig,
) -> Result<ExtractionOutcome, ExtractionError> {
    let classifier = LineClassifier::new().with_extra_words(&config.extra_skip_words);
    let mut outcome = ExtractionOutcome::default();

    for line in lines {
        let line = line.trim();
        if classifier.is_noise(line) {
            outcome.noise_count += 1;
            continue;
        }
        match parse_line(line) {
            Some(item) => outcome.items.push(item),
            None => {
                debug!("skipping unparsed line: {:?}", line);
                if config.keep_unparsed {
                    outcome.unparsed.push(line.to_string());
                }
            }
        }
    }

    if outcome.items.is_empty() {
        return Err(ExtractionError::EmptyExtraction {
            raw_lines: lines.to_vec(),
        });
    }

    info!(
        "extracted {} items ({} noise, {} unparsed)",
        outcome.items.len(),
        outcome.noise_count,
        outcome.unparsed.len()
    );

    Ok(outcome)
}
