//! Tabular input: schema resolution and normalization.

pub mod normalizer;
pub mod schema;

pub use normalizer::{normalize, MissingCell, NormalizedTable, RawTable};
pub use schema::{ColumnMap, Field};
