//! Ledger transaction entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, TransactionId, ValidationError};

use super::Category;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Revenue,
    Expense,
}

impl TransactionKind {
    /// Storage key used in the database.
    pub fn storage_key(&self) -> &'static str {
        match self {
            TransactionKind::Revenue => "revenue",
            TransactionKind::Expense => "expense",
        }
    }

    /// Parses a storage key.
    pub fn from_storage_key(s: &str) -> Option<Self> {
        match s {
            "revenue" => Some(TransactionKind::Revenue),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// A single revenue or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: ProfileId,
    pub date: NaiveDate,
    pub description: String,
    /// Amount in the user's currency, always positive; direction lives in
    /// `kind`.
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    pub created_at: Timestamp,
}

impl Transaction {
    /// Creates a validated transaction.
    pub fn new(
        user_id: ProfileId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if !(amount > 0.0) {
            return Err(ValidationError::not_positive("amount", amount));
        }

        Ok(Self {
            id: TransactionId::new(),
            user_id,
            date,
            description,
            amount,
            kind,
            category,
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn creates_valid_transaction() {
        let tx = Transaction::new(
            ProfileId::new(),
            test_date(),
            "Client invoice #42",
            1500.0,
            TransactionKind::Revenue,
            Category::Income,
        )
        .unwrap();

        assert_eq!(tx.amount, 1500.0);
        assert_eq!(tx.kind, TransactionKind::Revenue);
    }

    #[test]
    fn rejects_blank_description() {
        let result = Transaction::new(
            ProfileId::new(),
            test_date(),
            "   ",
            10.0,
            TransactionKind::Expense,
            Category::Other,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [0.0, -5.0, f64::NAN] {
            let result = Transaction::new(
                ProfileId::new(),
                test_date(),
                "coffee",
                amount,
                TransactionKind::Expense,
                Category::Food,
            );
            assert!(result.is_err(), "amount {} should be rejected", amount);
        }
    }

    #[test]
    fn kind_storage_keys_roundtrip() {
        for kind in [TransactionKind::Revenue, TransactionKind::Expense] {
            assert_eq!(TransactionKind::from_storage_key(kind.storage_key()), Some(kind));
        }
        assert_eq!(TransactionKind::from_storage_key("transfer"), None);
    }
}
