//! Listing normalization: price text and condition markup of one seller
//! row turned into a unit price, a copy count and a grade.

use log::{debug, warn};
use mtg_common::ConditionGrade;

/// Marker of bulk offers priced per unit: "<lot> PPU <unit>"
const PLAYSET_MARKER: &str = "PPU";

/// One seller row as found on the card page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListingRow {
    /// Visible text of the price cell, e.g. "0,50 €" or "40,00 € PPU 10,00 €"
    pub price: Option<String>,
    /// Markup or text of the condition cell
    pub condition: Option<String>,
}

impl RawListingRow {
    pub fn new(price: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            condition: Some(condition.into()),
        }
    }
}

/// Price, copy count and grade of a seller row
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub unit_price: Option<f64>,
    pub available_copies: u32,
    pub condition: Option<ConditionGrade>,
}

impl NormalizedListing {
    /// Normalize a raw row. Rows whose price cannot be read get no copies.
    pub fn from_row(row: &RawListingRow) -> Self {
        let (unit_price, available_copies) = row
            .price
            .as_deref()
            .and_then(parse_price_cell)
            .map_or((None, 0), |(price, copies)| (Some(price), copies));

        let condition = row.condition.as_deref().and_then(ConditionGrade::lookup);

        Self {
            unit_price,
            available_copies,
            condition,
        }
    }

    /// Copies this listing contributes to a request for `min_condition`.
    ///
    /// Zero unless both price and condition were read and the condition is
    /// at least as good as `min_condition`.
    pub fn qualifying_copies(&self, min_condition: ConditionGrade) -> u32 {
        match (self.unit_price, self.condition) {
            (Some(_), Some(condition)) if condition.satisfies(min_condition) => {
                self.available_copies
            }
            _ => 0,
        }
    }
}

/// Parse a price cell into `(unit_price, available_copies)`.
///
/// "5,50 €" is one copy at 5.50. "40,00 € PPU 10,00 €" is a lot of four
/// copies at 10.00 each.
pub fn parse_price_cell(text: &str) -> Option<(f64, u32)> {
    let text = text.trim().trim_end_matches('€').trim_end();
    if text.is_empty() {
        return None;
    }

    let text = to_decimal_point(text);

    let Some((lot, unit)) = text.split_once(PLAYSET_MARKER) else {
        return match parse_amount(&text) {
            Some(price) => Some((price, 1)),
            None => {
                warn!("Unreadable price: {text:?}");
                None
            }
        };
    };

    let (Some(lot_price), Some(unit_price)) = (parse_amount(lot), parse_amount(unit)) else {
        warn!("Unreadable playset price: {text:?}");
        return None;
    };
    if unit_price <= 0.0 {
        warn!("Playset with zero unit price: {text:?}");
        return None;
    }

    let copies = (lot_price / unit_price).round() as u32;
    debug!("Playset {lot_price:.2} at {unit_price:.2} per unit = {copies} copies");
    Some((unit_price, copies))
}

/// "1.234,56" -> "1234.56", "0,50" -> "0.50"
fn to_decimal_point(text: &str) -> String {
    if text.contains(',') {
        text.replace('.', "").replace(',', ".")
    } else {
        text.to_string()
    }
}

/// Parse a number, ignoring decoration such as "(", ":" or "€" around it.
fn parse_amount(s: &str) -> Option<f64> {
    let number = s.trim_matches(|c: char| !(c.is_ascii_digit() || c == '.'));
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
