//! Card condition grades as used by Cardmarket sellers.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Physical condition of a card, best (`Mint`) to worst (`Poor`).
///
/// Ordering follows [`ConditionGrade::rank`], so `a <= b` means `a` is at
/// least as good as `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ConditionGrade {
    Mint,
    NearMint,
    Excellent,
    Good,
    #[default]
    Played,
    LightPlayed,
    Poor,
}

/// Labels in matching order. Multi-word labels come before the single
/// words they contain ("Near Mint" before "Mint", "Light Played" before
/// "Played").
const LOOKUP_ORDER: &[(&str, ConditionGrade)] = &[
    ("Near Mint", ConditionGrade::NearMint),
    ("Light Played", ConditionGrade::LightPlayed),
    ("Mint", ConditionGrade::Mint),
    ("Excellent", ConditionGrade::Excellent),
    ("Good", ConditionGrade::Good),
    ("Played", ConditionGrade::Played),
    ("Poor", ConditionGrade::Poor),
];

impl ConditionGrade {
    /// All grades in rank order
    pub const ALL: [ConditionGrade; 7] = [
        ConditionGrade::Mint,
        ConditionGrade::NearMint,
        ConditionGrade::Excellent,
        ConditionGrade::Good,
        ConditionGrade::Played,
        ConditionGrade::LightPlayed,
        ConditionGrade::Poor,
    ];

    /// Ordinal rank, 0 = Mint, 6 = Poor
    pub fn rank(self) -> u8 {
        match self {
            ConditionGrade::Mint => 0,
            ConditionGrade::NearMint => 1,
            ConditionGrade::Excellent => 2,
            ConditionGrade::Good => 3,
            ConditionGrade::Played => 4,
            ConditionGrade::LightPlayed => 5,
            ConditionGrade::Poor => 6,
        }
    }

    /// Label as rendered on listing pages (e.g. "Near Mint")
    pub fn label(self) -> &'static str {
        match self {
            ConditionGrade::Mint => "Mint",
            ConditionGrade::NearMint => "Near Mint",
            ConditionGrade::Excellent => "Excellent",
            ConditionGrade::Good => "Good",
            ConditionGrade::Played => "Played",
            ConditionGrade::LightPlayed => "Light Played",
            ConditionGrade::Poor => "Poor",
        }
    }

    /// Short code used on the command line (e.g. "nm")
    pub fn code(self) -> &'static str {
        match self {
            ConditionGrade::Mint => "m",
            ConditionGrade::NearMint => "nm",
            ConditionGrade::Excellent => "ex",
            ConditionGrade::Good => "g",
            ConditionGrade::Played => "pl",
            ConditionGrade::LightPlayed => "lp",
            ConditionGrade::Poor => "po",
        }
    }

    /// Find the grade named inside a condition cell.
    ///
    /// The cell may carry markup and whitespace around the label; the first
    /// label of the lookup table contained in `text` wins.
    pub fn lookup(text: &str) -> Option<Self> {
        LOOKUP_ORDER
            .iter()
            .find(|(label, _)| text.contains(label))
            .map(|&(_, grade)| grade)
    }

    /// True if `self` is at least as good as `minimum`
    pub fn satisfies(self, minimum: ConditionGrade) -> bool {
        self.rank() <= minimum.rank()
    }
}

impl fmt::Display for ConditionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConditionGrade {
    type Err = Error;

    /// Accepts a short code ("nm") or a full label ("near mint"), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConditionGrade::ALL
            .into_iter()
            .find(|grade| grade.code() == wanted || grade.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownCondition(s.to_string()))
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
