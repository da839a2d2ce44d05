//! Router configuration for billing endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::AppState;
use super::handlers::{get_entitlement, handle_stripe_webhook};

/// Authenticated billing routes, mounted at `/api/billing`.
pub fn billing_routes() -> Router<AppState> {
    Router::new().route("/entitlement", get(get_entitlement))
}

/// Webhook routes, mounted at `/api/webhooks`.
///
/// Separate from the authenticated routes: deliveries carry no user session
/// and are authenticated by signature instead.
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/stripe", post(handle_stripe_webhook))
}
