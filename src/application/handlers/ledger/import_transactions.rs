//! ImportTransactionsHandler - Bulk insert of pre-parsed spreadsheet rows.
//!
//! Import is a Pro feature. Rows arrive already parsed into fields; the
//! spreadsheet itself never reaches the backend.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::billing::PlanLimits;
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::ledger::{Category, Transaction, TransactionKind};
use crate::ports::{ProfileRepository, TransactionRepository};

/// One row of an import.
#[derive(Debug, Clone)]
pub struct ImportRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
}

/// Command to import a batch of rows.
#[derive(Debug, Clone)]
pub struct ImportTransactionsCommand {
    pub user_id: ProfileId,
    pub rows: Vec<ImportRow>,
}

/// Handler for bulk imports.
pub struct ImportTransactionsHandler {
    transactions: Arc<dyn TransactionRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ImportTransactionsHandler {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            transactions,
            profiles,
        }
    }

    /// Validates every row before writing any; the batch lands atomically
    /// through `save_all`.
    pub async fn handle(
        &self,
        cmd: ImportTransactionsCommand,
    ) -> Result<Vec<Transaction>, DomainError> {
        let profile = self
            .profiles
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

        if !PlanLimits::for_entitlement(profile.is_pro).can_import {
            return Err(DomainError::new(
                ErrorCode::ProRequired,
                "spreadsheet import is a Pro feature",
            ));
        }

        let mut batch = Vec::with_capacity(cmd.rows.len());
        for row in cmd.rows {
            batch.push(Transaction::new(
                cmd.user_id,
                row.date,
                row.description,
                row.amount,
                row.kind,
                row.category,
            )?);
        }

        self.transactions.save_all(&batch).await?;
        Ok(batch)
    }
}
