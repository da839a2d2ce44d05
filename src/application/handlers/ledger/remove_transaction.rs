//! RemoveTransactionHandler - Deletes a ledger entry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId, TransactionId};
use crate::ports::TransactionRepository;

/// Command to delete a transaction.
#[derive(Debug, Clone)]
pub struct RemoveTransactionCommand {
    pub user_id: ProfileId,
    pub transaction_id: TransactionId,
}

/// Handler for transaction deletion.
pub struct RemoveTransactionHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl RemoveTransactionHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub async fn handle(&self, cmd: RemoveTransactionCommand) -> Result<(), DomainError> {
        self.transactions
            .delete(&cmd.user_id, &cmd.transaction_id)
            .await
    }
}
