//! Owned-inventory offset: copies already in the collection are not priced.

use mtg_common::DecklistEntry;

/// Cards already owned, looked up by case-insensitive name
#[derive(Debug, Clone, Default)]
pub struct OwnedInventory {
    cards: Vec<(u32, String)>,
}

/// Split of a requested quantity into owned and still-to-buy copies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub owned: u32,
    pub remaining: u32,
}

impl OwnedInventory {
    /// Build from parsed decklist entries; comments are skipped
    pub fn from_entries(entries: &[DecklistEntry]) -> Self {
        let cards = entries
            .iter()
            .filter_map(DecklistEntry::card)
            .map(|(quantity, name)| (quantity, name.to_string()))
            .collect();
        Self { cards }
    }

    /// Quantity of the first entry whose name matches, ignoring case
    pub fn owned_quantity(&self, name: &str) -> u32 {
        let wanted = name.to_lowercase();
        self.cards
            .iter()
            .find(|(_, owned)| owned.to_lowercase() == wanted)
            .map_or(0, |(quantity, _)| *quantity)
    }

    /// Offset `requested` copies of `name` against the inventory
    pub fn reconcile(&self, name: &str, requested: u32) -> Reconciliation {
        let owned = requested.min(self.owned_quantity(name));
        Reconciliation {
            owned,
            remaining: requested - owned,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
