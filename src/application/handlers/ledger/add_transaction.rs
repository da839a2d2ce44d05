//! AddTransactionHandler - Records one revenue or expense entry.
//!
//! Enforces the trial-plan ceiling: free accounts hold at most five entries
//! of each kind; Pro accounts are unlimited.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::billing::PlanLimits;
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::ledger::{Category, Transaction, TransactionKind};
use crate::ports::{ProfileRepository, TransactionRepository};

/// Command to record a transaction.
#[derive(Debug, Clone)]
pub struct AddTransactionCommand {
    pub user_id: ProfileId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
}

/// Handler for recording transactions.
pub struct AddTransactionHandler {
    transactions: Arc<dyn TransactionRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AddTransactionHandler {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            transactions,
            profiles,
        }
    }

    pub async fn handle(&self, cmd: AddTransactionCommand) -> Result<Transaction, DomainError> {
        let profile = self
            .profiles
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

        let limits = PlanLimits::for_entitlement(profile.is_pro);
        if limits.max_entries_per_kind.is_some() {
            let current = self
                .transactions
                .count_by_kind(&cmd.user_id, cmd.kind)
                .await?;
            if !limits.allows_another_entry(cmd.kind, current) {
                return Err(DomainError::new(
                    ErrorCode::PlanLimitReached,
                    "trial plan entry limit reached, upgrade to Pro to continue",
                )
                .with_detail("kind", format!("{:?}", cmd.kind)));
            }
        }

        let transaction = Transaction::new(
            cmd.user_id,
            cmd.date,
            cmd.description,
            cmd.amount,
            cmd.kind,
            cmd.category,
        )?;

        self.transactions.save(&transaction).await?;
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{InMemoryProfiles, InMemoryTransactions};

    fn cmd(user_id: ProfileId, kind: TransactionKind) -> AddTransactionCommand {
        AddTransactionCommand {
            user_id,
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            description: "entry".to_string(),
            amount: 42.0,
            kind,
            category: Category::Other,
        }
    }

    #[tokio::test]
    async fn records_entry_for_free_user_under_limit() {
        let profiles = InMemoryProfiles::with_free_user("a@b.com");
        let user_id = profiles.only_user_id();
        let transactions = Arc::new(InMemoryTransactions::new());
        let handler = AddTransactionHandler::new(transactions.clone(), Arc::new(profiles));

        let tx = handler
            .handle(cmd(user_id, TransactionKind::Expense))
            .await
            .unwrap();

        assert_eq!(tx.amount, 42.0);
        assert_eq!(transactions.len(), 1);
    }

    #[tokio::test]
    async fn sixth_entry_of_a_kind_is_rejected_for_free_user() {
        let profiles = InMemoryProfiles::with_free_user("a@b.com");
        let user_id = profiles.only_user_id();
        let transactions = Arc::new(InMemoryTransactions::new());
        let handler = AddTransactionHandler::new(transactions.clone(), Arc::new(profiles));

        for _ in 0..5 {
            handler
                .handle(cmd(user_id, TransactionKind::Expense))
                .await
                .unwrap();
        }

        let result = handler.handle(cmd(user_id, TransactionKind::Expense)).await;
        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::PlanLimitReached,
                ..
            })
        ));
        assert_eq!(transactions.len(), 5);
    }

    #[tokio::test]
    async fn kinds_are_limited_independently() {
        let profiles = InMemoryProfiles::with_free_user("a@b.com");
        let user_id = profiles.only_user_id();
        let handler = AddTransactionHandler::new(
            Arc::new(InMemoryTransactions::new()),
            Arc::new(profiles),
        );

        for _ in 0..5 {
            handler
                .handle(cmd(user_id, TransactionKind::Expense))
                .await
                .unwrap();
        }

        // Expense limit reached, revenue still open.
        let result = handler.handle(cmd(user_id, TransactionKind::Revenue)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn pro_user_has_no_ceiling() {
        let profiles = InMemoryProfiles::with_pro_user("a@b.com");
        let user_id = profiles.only_user_id();
        let handler = AddTransactionHandler::new(
            Arc::new(InMemoryTransactions::new()),
            Arc::new(profiles),
        );

        for _ in 0..12 {
            handler
                .handle(cmd(user_id, TransactionKind::Expense))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected() {
        let profiles = InMemoryProfiles::with_pro_user("a@b.com");
        let user_id = profiles.only_user_id();
        let handler = AddTransactionHandler::new(
            Arc::new(InMemoryTransactions::new()),
            Arc::new(profiles),
        );

        let mut command = cmd(user_id, TransactionKind::Expense);
        command.amount = -3.0;
        assert!(handler.handle(command).await.is_err());
    }
}
