//! Deck Price - MTG decklist pricing
//!
//! Quotes cards against the seller listings on their Cardmarket page and
//! totals whole decklists, minus the copies already owned.

pub mod cardmarket;
pub mod error;
pub mod html;
pub mod inventory;
pub mod listing;
pub mod report;
pub mod selector;

pub use cardmarket::{card_url_key, CardmarketClient, ListingSource};
pub use error::{PriceError, Result};
pub use inventory::{OwnedInventory, Reconciliation};
pub use listing::{NormalizedListing, RawListingRow};
pub use report::{justify, single_card_message, DeckPricer, DeckReport, PricingOptions};
pub use selector::{select, CardRequest, PriceQuote};
