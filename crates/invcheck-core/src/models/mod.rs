//! Data models for items, datasets, and configuration.

pub mod config;
pub mod item;

pub use config::{CheckerConfig, CleaningConfig, LineConfig};
pub use item::{Dataset, InvoiceItem, ItemId};
