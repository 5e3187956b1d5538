//! Deck pricing: walks a decklist, offsets owned copies, quotes the rest and
//! builds the two-column text report.

use crate::cardmarket::ListingSource;
use crate::error::Result;
use crate::inventory::OwnedInventory;
use crate::selector::{CardRequest, PriceQuote};
use log::{info, warn};
use mtg_common::{ConditionGrade, DecklistEntry};
use std::path::Path;

/// Width of a justified report line
pub const LINE_WIDTH: usize = 70;

const ALREADY_OWNED: &str = "ALREADY OWNED";
const DECK_NOT_FOUND: &str = "*** FAILED TO FIND - CHECK SPELLING ***";
const DECK_NOT_ENOUGH: &str = "*** FAILED TO FIND - # OF COPIES / CONDITION ***";
const SINGLE_NOT_FOUND: &str = "Not found - check spelling.";
const SINGLE_NOT_ENOUGH: &str = "Not found - change # of copies / min. condition.";
const TOTAL_LABEL: &str = "Total deck price";

/// Pricing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingOptions {
    /// Worst acceptable condition
    pub min_condition: ConditionGrade,
    /// Copy decklist comments into the report
    pub include_comments: bool,
    /// Subtract owned copies before pricing
    pub use_owned: bool,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            min_condition: ConditionGrade::default(),
            include_comments: true,
            use_owned: true,
        }
    }
}

/// `left` and `right` joined by dashes up to [`LINE_WIDTH`] characters.
/// No dashes when the two sides are already too long.
pub fn justify(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let dashes = "-".repeat(LINE_WIDTH.saturating_sub(used));
    format!("{left}{dashes}{right}")
}

fn format_euro(amount: f64) -> String {
    format!("{amount:.2} euro")
}

/// Result line of a single-card query
pub fn single_card_message(quote: &PriceQuote) -> String {
    match quote {
        PriceQuote::Found(prices) => format_euro(prices.iter().sum()),
        PriceQuote::PageNotFound => SINGLE_NOT_FOUND.to_string(),
        PriceQuote::NotEnough => SINGLE_NOT_ENOUGH.to_string(),
    }
}

/// Priced decklist, line by line, with the running total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckReport {
    lines: Vec<String>,
    total: f64,
}

impl DeckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Justified `left`/`right` line
    pub fn push_row(&mut self, left: &str, right: &str) {
        self.lines.push(format!("{}\n", justify(left, right)));
    }

    /// Text copied as-is, terminator included
    pub fn push_verbatim(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    pub fn add_to_total(&mut self, amount: f64) {
        self.total += amount;
    }

    /// Append the blank separator and the total line
    pub fn finish(mut self) -> Self {
        self.lines.push("\n".to_string());
        let total = format_euro(self.total);
        self.push_row(TOTAL_LABEL, &total);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Full report text
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Write the report to `path`, replacing any existing file
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.render())?;
        info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}

/// Prices decklists against a listing source
pub struct DeckPricer<'a, S: ListingSource> {
    source: &'a S,
    options: PricingOptions,
    owned: OwnedInventory,
}

impl<'a, S: ListingSource> DeckPricer<'a, S> {
    pub fn new(source: &'a S, options: PricingOptions) -> Self {
        Self {
            source,
            options,
            owned: OwnedInventory::default(),
        }
    }

    /// Owned cards to offset; ignored unless `options.use_owned`
    pub fn with_owned(mut self, owned: OwnedInventory) -> Self {
        self.owned = owned;
        self
    }

    /// Quote `copies` of a single card
    pub fn quote_card(&self, name: &str, copies: u32) -> PriceQuote {
        let rows = self.source.listing_rows(name);
        let request = CardRequest::new(name, copies, self.options.min_condition);
        let quote = request.quote(rows.as_deref());
        if let PriceQuote::PageNotFound = quote {
            warn!("No listings found for {name}");
        }
        quote
    }

    /// Price every card line of `entries`, in order
    pub fn price_deck(&self, entries: &[DecklistEntry]) -> DeckReport {
        let mut report = DeckReport::new();

        for entry in entries {
            match entry {
                DecklistEntry::Comment(text) => {
                    if self.options.include_comments {
                        report.push_verbatim(text);
                    }
                }
                DecklistEntry::CardLine { quantity, name } => {
                    self.price_card_line(&mut report, *quantity, name);
                }
            }
        }

        let report = report.finish();
        info!("Total deck price: {:.2} euro", report.total());
        report
    }

    fn price_card_line(&self, report: &mut DeckReport, quantity: u32, name: &str) {
        let mut remaining = quantity;

        if self.options.use_owned {
            let split = self.owned.reconcile(name, quantity);
            if split.owned > 0 {
                report.push_row(&format!("{}x {name}", split.owned), ALREADY_OWNED);
                remaining = split.remaining;
            }
        }

        if remaining == 0 {
            return;
        }

        info!("Pricing {remaining}x {name}");
        let left = format!("{remaining}x {name}");
        match self.quote_card(name, remaining) {
            PriceQuote::Found(prices) => {
                let cost: f64 = prices.iter().sum();
                report.add_to_total(cost);
                report.push_row(&left, &format_euro(cost));
            }
            PriceQuote::PageNotFound => report.push_row(&left, DECK_NOT_FOUND),
            PriceQuote::NotEnough => report.push_row(&left, DECK_NOT_ENOUGH),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
