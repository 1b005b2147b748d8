//! Canonical field enumeration and tolerant header resolution.
//!
//! All downstream code addresses only these canonical fields; raw header
//! spellings ("Particulars", " qty ", "RATE") are resolved here once.

/// Canonical columns of the tabular input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Item name. The only required column.
    Particulars,
    /// Quantity.
    Qty,
    /// Unit rate.
    Rate,
    /// Line value.
    Value,
    /// Pre-existing verified flag.
    Verified,
}

impl Field {
    /// Resolve a raw header to a canonical field, tolerating case and
    /// surrounding whitespace.
    pub fn resolve(header: &str) -> Option<Field> {
        match header.trim().to_lowercase().as_str() {
            "particulars" | "item" | "name" => Some(Field::Particulars),
            "qty" | "quantity" => Some(Field::Qty),
            "rate" => Some(Field::Rate),
            "value" => Some(Field::Value),
            "verified" => Some(Field::Verified),
            _ => None,
        }
    }

    /// Canonical header spelling used on export.
    pub fn header(self) -> &'static str {
        match self {
            Field::Particulars => "Particulars",
            Field::Qty => "Qty",
            Field::Rate => "Rate",
            Field::Value => "Value",
            Field::Verified => "Verified",
        }
    }
}

/// Positions of the canonical fields within one raw header row.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub particulars: Option<usize>,
    pub qty: Option<usize>,
    pub rate: Option<usize>,
    pub value: Option<usize>,
    pub verified: Option<usize>,
}

impl ColumnMap {
    /// Resolve all headers. First match wins for each field.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut map = Self::default();
        for (i, header) in headers.iter().enumerate() {
            let slot = match Field::resolve(header) {
                Some(Field::Particulars) => &mut map.particulars,
                Some(Field::Qty) => &mut map.qty,
                Some(Field::Rate) => &mut map.rate,
                Some(Field::Value) => &mut map.value,
                Some(Field::Verified) => &mut map.verified,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(i);
            }
        }
        map
    }
}
