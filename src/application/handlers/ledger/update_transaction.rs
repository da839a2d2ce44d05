//! UpdateTransactionHandler - Edits an existing ledger entry.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, TransactionId, ValidationError};
use crate::domain::ledger::{Category, Transaction, TransactionKind};
use crate::ports::{TransactionFilter, TransactionRepository};

/// Command replacing the mutable fields of a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionCommand {
    pub user_id: ProfileId,
    pub transaction_id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
}

/// Handler for transaction edits.
pub struct UpdateTransactionHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl UpdateTransactionHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub async fn handle(&self, cmd: UpdateTransactionCommand) -> Result<Transaction, DomainError> {
        if cmd.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }
        if !(cmd.amount > 0.0) {
            return Err(ValidationError::not_positive("amount", cmd.amount).into());
        }

        let existing = self
            .transactions
            .list_for_user(&cmd.user_id, TransactionFilter::default())
            .await?
            .into_iter()
            .find(|t| t.id == cmd.transaction_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TransactionNotFound, "transaction not found")
            })?;

        let updated = Transaction {
            date: cmd.date,
            description: cmd.description,
            amount: cmd.amount,
            kind: cmd.kind,
            category: cmd.category,
            ..existing
        };

        self.transactions.update(&updated).await?;
        Ok(updated)
    }
}
