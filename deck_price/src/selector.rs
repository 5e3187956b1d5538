//! Greedy selection of the cheapest qualifying copies of a card.
//!
//! Rows are taken in page order, which Cardmarket sorts by ascending price.
//! The order is trusted, not re-sorted: the first `quantity` qualifying
//! copies are the quote.

use crate::listing::{NormalizedListing, RawListingRow};
use log::debug;
use mtg_common::ConditionGrade;

/// Copies of one card wanted at a minimum condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub name: String,
    pub quantity: u32,
    pub min_condition: ConditionGrade,
}

impl CardRequest {
    pub fn new(name: impl Into<String>, quantity: u32, min_condition: ConditionGrade) -> Self {
        Self {
            name: name.into(),
            quantity,
            min_condition,
        }
    }

    /// Quote this request against the rows of its card page
    pub fn quote(&self, rows: Option<&[RawListingRow]>) -> PriceQuote {
        select(rows, self.quantity, self.min_condition)
    }
}

/// Outcome of quoting a card
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuote {
    /// Unit price of every selected copy, one entry per copy
    Found(Vec<f64>),
    /// The card page or its listing table could not be found
    PageNotFound,
    /// Fewer qualifying copies listed than requested
    NotEnough,
}

impl PriceQuote {
    /// Sum of the selected copies, if found
    pub fn total(&self) -> Option<f64> {
        match self {
            PriceQuote::Found(prices) => Some(prices.iter().sum()),
            PriceQuote::PageNotFound | PriceQuote::NotEnough => None,
        }
    }
}

/// Select `quantity` copies at `min_condition` or better from `rows`.
///
/// `None` rows means the listing table was not found. A request for zero
/// copies is satisfied by any existing page.
pub fn select(
    rows: Option<&[RawListingRow]>,
    quantity: u32,
    min_condition: ConditionGrade,
) -> PriceQuote {
    let Some(rows) = rows else {
        return PriceQuote::PageNotFound;
    };

    let wanted = quantity as usize;
    let mut prices: Vec<f64> = Vec::with_capacity(wanted.min(rows.len()));
    if wanted == 0 {
        return PriceQuote::Found(prices);
    }

    for row in rows {
        let listing = NormalizedListing::from_row(row);
        let copies = listing.qualifying_copies(min_condition) as usize;

        if let Some(unit_price) = listing.unit_price.filter(|_| copies > 0) {
            // surplus copies of a lot are dropped
            let take = copies.min(wanted - prices.len());
            prices.extend(std::iter::repeat(unit_price).take(take));
        }

        if prices.len() == wanted {
            debug!("Selected {wanted} copies: {prices:?}");
            return PriceQuote::Found(prices);
        }
    }

    debug!(
        "Only {} of {wanted} copies at {min_condition} or better",
        prices.len()
    );
    PriceQuote::NotEnough
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
