//! TransactionRepository port - Persistent storage for ledger entries.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, TransactionId};
use crate::domain::ledger::{Transaction, TransactionKind};

/// Month/year filter for listings. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Port for storing and querying transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Inserts one transaction.
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError>;

    /// Inserts a batch (spreadsheet import). All-or-nothing.
    async fn save_all(&self, transactions: &[Transaction]) -> Result<(), DomainError>;

    /// Replaces an existing transaction owned by `user_id`.
    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError>;

    /// Deletes a transaction owned by `user_id`.
    async fn delete(&self, user_id: &ProfileId, id: &TransactionId) -> Result<(), DomainError>;

    /// Lists a user's transactions, optionally filtered by month/year,
    /// newest first.
    async fn list_for_user(
        &self,
        user_id: &ProfileId,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, DomainError>;

    /// Counts a user's entries of one kind (free-plan limit checks).
    async fn count_by_kind(
        &self,
        user_id: &ProfileId,
        kind: TransactionKind,
    ) -> Result<u32, DomainError>;
}
