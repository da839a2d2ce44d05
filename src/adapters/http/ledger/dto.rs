//! Request/response DTOs for ledger endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ledger::{Category, MonthlySummary, Transaction, TransactionKind};

/// Body for creating or editing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    /// Category label; anything off-list is stored as Other.
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionRequest {
    /// Resolves the optional category label. Without one, revenue defaults
    /// to Income and expenses to Other.
    pub fn resolved_category(&self) -> Category {
        match self.category.as_deref() {
            Some(label) => Category::parse_or_other(label),
            None => match self.kind {
                TransactionKind::Revenue => Category::Income,
                TransactionKind::Expense => Category::Other,
            },
        }
    }
}

/// Query string for listings: `?month=&year=`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListParams {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Query string for the summary endpoint: `?year=`.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub year: i32,
}

/// Body for bulk import: rows already parsed client-side.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<TransactionRequest>,
}

/// One transaction as returned to clients.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            date: tx.date,
            description: tx.description,
            amount: tx.amount,
            kind: tx.kind,
            category: tx.category.label().to_string(),
        }
    }
}

/// Listing wrapper.
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}

/// Twelve monthly buckets.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub year: i32,
    pub months: Vec<MonthlySummary>,
}
