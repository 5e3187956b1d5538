//! Shared types for MTG pricing tools
//!
//! Condition grades as printed on Cardmarket listings, and the plain-text
//! decklist format used for both wanted and owned cards.

pub mod condition;
pub mod decklist;
pub mod error;

pub use condition::ConditionGrade;
pub use decklist::{load_decklist, read_decklist, repair_apostrophes, DecklistEntry};
pub use error::{Error, Result};
