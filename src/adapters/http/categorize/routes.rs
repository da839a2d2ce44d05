//! Router configuration for the categorization endpoint.

use axum::routing::post;
use axum::Router;

use super::super::AppState;
use super::handlers::categorize_transaction;

/// Categorization routes, mounted at `/api/categorize`.
///
/// CORS preflight for browser callers is handled by the `CorsLayer` applied
/// to the whole router at startup.
pub fn categorize_routes() -> Router<AppState> {
    Router::new().route("/", post(categorize_transaction))
}
