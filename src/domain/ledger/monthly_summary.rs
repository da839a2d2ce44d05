//! Per-month revenue/expense aggregation.
//!
//! The backing data for the annual chart and the end-of-month report: twelve
//! buckets, one per calendar month, each totalling revenue and expense.

use chrono::Datelike;
use serde::Serialize;

use super::{Transaction, TransactionKind};

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Month number, 1-12.
    pub month: u32,
    pub revenue: f64,
    pub expense: f64,
}

impl MonthlySummary {
    /// Net result for the month.
    pub fn balance(&self) -> f64 {
        self.revenue - self.expense
    }
}

/// Aggregates a year's transactions into twelve monthly buckets.
///
/// Transactions outside `year` are skipped; months without activity stay at
/// zero so the caller always gets a full January-December series.
pub fn summarize_by_month(transactions: &[Transaction], year: i32) -> Vec<MonthlySummary> {
    let mut buckets: Vec<MonthlySummary> = (1..=12)
        .map(|month| MonthlySummary {
            month,
            revenue: 0.0,
            expense: 0.0,
        })
        .collect();

    for tx in transactions {
        if tx.date.year() != year {
            continue;
        }
        let bucket = &mut buckets[tx.date.month0() as usize];
        match tx.kind {
            TransactionKind::Revenue => bucket.revenue += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProfileId;
    use crate::domain::ledger::Category;
    use chrono::NaiveDate;

    fn tx(date: (i32, u32, u32), amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            ProfileId::new(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "entry",
            amount,
            kind,
            Category::Other,
        )
        .unwrap()
    }

    #[test]
    fn empty_input_yields_twelve_zero_buckets() {
        let summary = summarize_by_month(&[], 2026);
        assert_eq!(summary.len(), 12);
        assert!(summary.iter().all(|m| m.revenue == 0.0 && m.expense == 0.0));
        assert_eq!(summary[0].month, 1);
        assert_eq!(summary[11].month, 12);
    }

    #[test]
    fn sums_revenue_and_expense_into_their_month() {
        let transactions = vec![
            tx((2026, 3, 1), 1000.0, TransactionKind::Revenue),
            tx((2026, 3, 15), 250.0, TransactionKind::Expense),
            tx((2026, 3, 20), 50.0, TransactionKind::Expense),
            tx((2026, 7, 2), 400.0, TransactionKind::Revenue),
        ];

        let summary = summarize_by_month(&transactions, 2026);

        assert_eq!(summary[2].revenue, 1000.0);
        assert_eq!(summary[2].expense, 300.0);
        assert_eq!(summary[2].balance(), 700.0);
        assert_eq!(summary[6].revenue, 400.0);
        assert_eq!(summary[5].revenue, 0.0);
    }

    #[test]
    fn ignores_other_years() {
        let transactions = vec![
            tx((2025, 12, 31), 999.0, TransactionKind::Revenue),
            tx((2026, 1, 1), 100.0, TransactionKind::Revenue),
        ];

        let summary = summarize_by_month(&transactions, 2026);
        assert_eq!(summary[0].revenue, 100.0);
        assert_eq!(summary[11].revenue, 0.0);
    }
}
