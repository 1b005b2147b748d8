//! Line parser for non-noise OCR receipt lines.
//!
//! Two strategies, first success wins: a strict trailing-triple pattern,
//! then a whitespace tokenizer fallback. A line that matches neither is
//! skipped, never fatal.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::InvoiceItem;

lazy_static! {
    // <name> <qty> <rate> <value> with three trailing numeric tokens.
    static ref ITEM_LINE: Regex = Regex::new(
        r"^(?P<name>.+?)\s+(?P<qty>\d+(?:\.\d+)?)\s+(?P<rate>\d+(?:\.\d+)?)\s+(?P<value>\d+(?:\.\d+)?)$"
    )
    .unwrap();
}

/// Parse a single numeric token: integers and decimals accepted, anything
/// containing an alphabetic character or a sign rejected.
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let token = token.trim();
    if token.is_empty() || token.chars().any(|c| c.is_alphabetic()) {
        return None;
    }
    Decimal::from_str(token)
        .ok()
        .filter(|v| !v.is_sign_negative())
}

/// Parse one candidate line into an item.
///
/// Returns `None` when both strategies fail; the caller keeps the raw line
/// for manual inspection.
pub fn parse_line(line: &str) -> Option<InvoiceItem> {
    let line = line.trim();
    strict_parse(line).or_else(|| fallback_parse(line))
}

/// Strategy 1: strict pattern with the three trailing tokens as qty, rate,
/// value and everything before them as the name.
fn strict_parse(line: &str) -> Option<InvoiceItem> {
    let caps = ITEM_LINE.captures(line)?;
    let name = caps.name("name")?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some(InvoiceItem::new(
        name,
        parse_amount(caps.name("qty")?.as_str())?,
        parse_amount(caps.name("rate")?.as_str())?,
        parse_amount(caps.name("value")?.as_str())?,
    ))
}

/// Strategy 2: split on whitespace, take the last three tokens as numbers
/// and join the rest as the name.
fn fallback_parse(line: &str) -> Option<InvoiceItem> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }
    let (name_tokens, numeric) = tokens.split_at(tokens.len() - 3);
    let name = name_tokens.join(" ");
    if name.trim().is_empty() {
        return None;
    }
    Some(InvoiceItem::new(
        name,
        parse_amount(numeric[0])?,
        parse_amount(numeric[1])?,
        parse_amount(numeric[2])?,
    ))
}
