//! Router configuration for ledger endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::super::AppState;
use super::handlers::{
    add_transaction, get_monthly_summary, import_transactions, list_transactions,
    remove_transaction, update_transaction,
};

/// Ledger routes, mounted at `/api/transactions`.
pub fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(add_transaction))
        .route("/import", post(import_transactions))
        .route("/summary", get(get_monthly_summary))
        .route("/:id", put(update_transaction).delete(remove_transaction))
}
