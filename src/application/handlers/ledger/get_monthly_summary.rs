//! GetMonthlySummaryHandler - Query handler for the annual chart/report data.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::ledger::{summarize_by_month, MonthlySummary};
use crate::ports::{TransactionFilter, TransactionRepository};

/// Query for one year of monthly totals.
#[derive(Debug, Clone)]
pub struct GetMonthlySummaryQuery {
    pub user_id: ProfileId,
    pub year: i32,
}

/// Handler for monthly summaries.
pub struct GetMonthlySummaryHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl GetMonthlySummaryHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    /// Always returns twelve buckets, January through December.
    pub async fn handle(
        &self,
        query: GetMonthlySummaryQuery,
    ) -> Result<Vec<MonthlySummary>, DomainError> {
        let transactions = self
            .transactions
            .list_for_user(
                &query.user_id,
                TransactionFilter {
                    month: None,
                    year: Some(query.year),
                },
            )
            .await?;

        Ok(summarize_by_month(&transactions, query.year))
    }
}
