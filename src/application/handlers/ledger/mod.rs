//! Ledger command and query handlers.

mod add_transaction;
mod get_monthly_summary;
mod import_transactions;
mod list_transactions;
mod remove_transaction;
mod update_transaction;

pub use add_transaction::{AddTransactionCommand, AddTransactionHandler};
pub use get_monthly_summary::{GetMonthlySummaryHandler, GetMonthlySummaryQuery};
pub use import_transactions::{ImportRow, ImportTransactionsCommand, ImportTransactionsHandler};
pub use list_transactions::{ListTransactionsHandler, ListTransactionsQuery};
pub use remove_transaction::{RemoveTransactionCommand, RemoveTransactionHandler};
pub use update_transaction::{UpdateTransactionCommand, UpdateTransactionHandler};
