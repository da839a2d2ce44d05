//! Closed set of transaction categories.
//!
//! The categorization assistant may only ever answer with one of these
//! labels; anything else collapses to `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Housing,
    Transport,
    Health,
    Education,
    Leisure,
    Clothing,
    Subscriptions,
    PersonalCare,
    Investments,
    Taxes,
    Debts,
    Donations,
    Income,
    Other,
}

/// Every category, in display order.
pub const ALL_CATEGORIES: [Category; 15] = [
    Category::Food,
    Category::Housing,
    Category::Transport,
    Category::Health,
    Category::Education,
    Category::Leisure,
    Category::Clothing,
    Category::Subscriptions,
    Category::PersonalCare,
    Category::Investments,
    Category::Taxes,
    Category::Debts,
    Category::Donations,
    Category::Income,
    Category::Other,
];

impl Category {
    /// Human-readable label, as shown to users and to the model.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Leisure => "Leisure",
            Category::Clothing => "Clothing",
            Category::Subscriptions => "Subscriptions",
            Category::PersonalCare => "Personal Care",
            Category::Investments => "Investments",
            Category::Taxes => "Taxes",
            Category::Debts => "Debts",
            Category::Donations => "Donations",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    /// Storage key used in the database.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Housing => "housing",
            Category::Transport => "transport",
            Category::Health => "health",
            Category::Education => "education",
            Category::Leisure => "leisure",
            Category::Clothing => "clothing",
            Category::Subscriptions => "subscriptions",
            Category::PersonalCare => "personal_care",
            Category::Investments => "investments",
            Category::Taxes => "taxes",
            Category::Debts => "debts",
            Category::Donations => "donations",
            Category::Income => "income",
            Category::Other => "other",
        }
    }

    /// Strict parse of a label or storage key. Case-insensitive, tolerates
    /// surrounding whitespace and a trailing period (models love those).
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().trim_end_matches('.').to_lowercase();
        ALL_CATEGORIES.into_iter().find(|c| {
            c.label().to_lowercase() == cleaned || c.storage_key() == cleaned
        })
    }

    /// Lenient parse: anything outside the closed set becomes `Other`.
    pub fn parse_or_other(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
