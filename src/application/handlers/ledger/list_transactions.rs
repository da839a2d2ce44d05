//! ListTransactionsHandler - Query handler for a user's ledger.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::ledger::Transaction;
use crate::ports::{TransactionFilter, TransactionRepository};

/// Query for a user's transactions, optionally narrowed to a month/year.
#[derive(Debug, Clone)]
pub struct ListTransactionsQuery {
    pub user_id: ProfileId,
    pub filter: TransactionFilter,
}

/// Handler for transaction listings.
pub struct ListTransactionsHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl ListTransactionsHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub async fn handle(
        &self,
        query: ListTransactionsQuery,
    ) -> Result<Vec<Transaction>, DomainError> {
        self.transactions
            .list_for_user(&query.user_id, query.filter)
            .await
    }
}
