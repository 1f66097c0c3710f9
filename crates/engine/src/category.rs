//! Transaction categories and their display metadata.
//!
//! The set of categories is closed: labels, emoji and colours are resolved
//! with exhaustive matches so a new variant cannot be added without giving it
//! metadata.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EngineError, TransactionKind};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Education,
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Health,
    Income,
    Other,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 8] = [
        Category::Education,
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Income,
        Category::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Income => "income",
            Self::Other => "other",
        }
    }

    /// Human readable label used in charts and pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Food => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Education => "📚",
            Self::Food => "🍕",
            Self::Transportation => "🚌",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Health => "💊",
            Self::Income => "💰",
            Self::Other => "📝",
        }
    }

    /// Chart colour as an `(r, g, b)` triple.
    ///
    /// Income never shows up in the spending chart and shares the colour of
    /// `Other`.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Education => (0x3b, 0x82, 0xf6),
            Self::Food => (0xf9, 0x73, 0x16),
            Self::Transportation => (0x10, 0xb9, 0x81),
            Self::Entertainment => (0x8b, 0x5c, 0xf6),
            Self::Shopping => (0xef, 0x44, 0x44),
            Self::Health => (0x06, 0xb6, 0xd4),
            Self::Income | Self::Other => (0x6b, 0x72, 0x80),
        }
    }

    /// Whether a transaction of `kind` may carry this category.
    ///
    /// Income transactions must use [`Category::Income`]; expenses may use
    /// anything else.
    pub fn allows(self, kind: TransactionKind) -> bool {
        match kind {
            TransactionKind::Income => self == Self::Income,
            TransactionKind::Expense => self != Self::Income,
        }
    }

    /// Categories a transaction of `kind` may carry, in picker order.
    pub fn for_kind(kind: TransactionKind) -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(move |c| c.allows(kind))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or(EngineError::UnknownCategory(normalized))
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
        }
        assert_eq!(" Food ".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            Category::try_from("rent"),
            Err(EngineError::UnknownCategory("rent".to_string()))
        );
    }

    #[test]
    fn income_kind_only_allows_income_category() {
        let income: Vec<_> = Category::for_kind(TransactionKind::Income).collect();
        assert_eq!(income, vec![Category::Income]);

        let expense: Vec<_> = Category::for_kind(TransactionKind::Expense).collect();
        assert_eq!(expense.len(), 7);
        assert!(!expense.contains(&Category::Income));
    }

    #[test]
    fn metadata_matches_dashboard_palette() {
        assert_eq!(Category::Food.label(), "Food & Dining");
        assert_eq!(Category::Education.emoji(), "📚");
        assert_eq!(Category::Education.rgb(), (59, 130, 246));
        assert_eq!(Category::Income.rgb(), Category::Other.rgb());
    }
}
