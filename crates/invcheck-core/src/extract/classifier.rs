//! Noise classifier for OCR receipt lines.
//!
//! Runs strictly before parsing so that a totals line shaped like an item
//! line ("TOTAL 3 45.00 135.00") is never handed to the parser.

/// Built-in skip vocabulary: totals, item-count headers, tax labels,
/// cashier/bill metadata, and the generic amount header.
pub const SKIP_WORDS: &[&str] = &[
    "total",
    "subtotal",
    "items",
    "amount",
    "gst",
    "tax",
    "cashier",
    "bill",
    "invoice",
    "receipt",
    "thank",
];

/// Classifier over a fixed skip vocabulary plus optional extra words.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    extra_words: Vec<String>,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append configuration-provided words to the vocabulary.
    pub fn with_extra_words(mut self, words: &[String]) -> Self {
        self.extra_words = words.iter().map(|w| w.to_lowercase()).collect();
        self
    }

    /// A line is noise iff it contains any vocabulary member,
    /// case-insensitively. Blank lines are noise as well.
    pub fn is_noise(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return true;
        }
        let lower = line.to_lowercase();
        SKIP_WORDS.iter().any(|w| lower.contains(w))
            || self.extra_words.iter().any(|w| lower.contains(w.as_str()))
    }
}
