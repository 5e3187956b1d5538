//! Cardmarket card pages as a source of seller listings

use crate::error::{PriceError, Result};
use crate::html;
use crate::listing::RawListingRow;
use log::{debug, warn};
use std::time::Duration;

/// Card pages live at `<CARDS_URL><url key>`
const CARDS_URL: &str = "https://www.cardmarket.com/en/Magic/Cards/";
const USER_AGENT: &str = "deck_price/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce the seller rows for a card name
pub trait ListingSource {
    /// Seller rows in page order, or `None` when the card page or its
    /// listing table could not be found.
    fn listing_rows(&self, card_name: &str) -> Option<Vec<RawListingRow>>;
}

/// URL key of a card page: lowercase, words joined with `+`, everything
/// else percent-encoded ("Jace, the Mind Sculptor" -> "jace%2C+the+mind+sculptor").
pub fn card_url_key(card_name: &str) -> String {
    card_name
        .trim()
        .to_lowercase()
        .split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Blocking client for Cardmarket card pages
#[derive(Debug, Clone)]
pub struct CardmarketClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CardmarketClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(CARDS_URL)
    }

    /// Client for card pages under `base_url` (for testing with mock servers)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }

    /// URL of the card page for `card_name`
    pub fn card_url(&self, card_name: &str) -> String {
        format!("{}{}", self.base_url, card_url_key(card_name))
    }

    /// Download the card page HTML
    pub fn fetch_page(&self, card_name: &str) -> Result<String> {
        let url = self.card_url(card_name);
        debug!("Fetching card page: {url}");

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(PriceError::HttpStatus(response.status()));
        }

        Ok(response.text()?)
    }
}

impl ListingSource for CardmarketClient {
    fn listing_rows(&self, card_name: &str) -> Option<Vec<RawListingRow>> {
        let page = match self.fetch_page(card_name) {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to fetch page for {card_name}: {e}");
                return None;
            }
        };

        let rows = html::listing_rows(&page);
        if rows.is_none() {
            warn!("No listing table on the page for {card_name}");
        }
        rows
    }
}

#[cfg(test)]
#[path = "cardmarket_tests.rs"]
mod tests;
