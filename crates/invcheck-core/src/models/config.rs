//! Configuration structures for the review pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the invcheck pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Tabular cleaning configuration.
    pub cleaning: CleaningConfig,

    /// OCR line extraction configuration.
    pub extraction: LineConfig,
}

/// Tabular cleaning pass configuration.
///
/// Each step is independently toggleable; when composed they run in field
/// order: dedupe, trim, fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Remove exact-duplicate rows.
    pub drop_duplicates: bool,

    /// Trim whitespace from column names and string cells.
    pub trim_whitespace: bool,

    /// Replace missing numeric cells with zero.
    pub fill_missing: bool,

    /// Seed the verification store from a pre-existing verified column.
    pub seed_verified: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            drop_duplicates: true,
            trim_whitespace: true,
            fill_missing: true,
            seed_verified: true,
        }
    }
}

/// OCR line extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Extra noise words appended to the built-in skip vocabulary.
    pub extra_skip_words: Vec<String>,

    /// Keep lines that failed both parse strategies for manual review.
    pub keep_unparsed: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            extra_skip_words: Vec::new(),
            keep_unparsed: true,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
