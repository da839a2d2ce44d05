//! Categorization handler.

mod categorize_transaction;

pub use categorize_transaction::CategorizeTransactionHandler;
