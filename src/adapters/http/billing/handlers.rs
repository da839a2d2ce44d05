//! HTTP handlers for billing endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use tracing::warn;

use crate::application::handlers::billing::{
    GetEntitlementQuery, HandlePaymentWebhookCommand,
};
use crate::domain::billing::WebhookError;

use super::super::auth::AuthenticatedUser;
use super::super::error::{ApiError, ErrorResponse};
use super::super::AppState;
use super::dto::{EntitlementResponse, WebhookAckResponse};

/// POST /api/webhooks/stripe - Payment provider event delivery.
///
/// Body stays raw bytes end to end; signature verification is over the exact
/// byte sequence. Error responses carry a code and a short message, never
/// the signature or any secret.
pub async fn handle_stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let handler = state.payment_webhook_handler();
    let cmd = HandlePaymentWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    match handler.handle(cmd).await {
        // Both applied upgrades and ignored event types are acknowledged so
        // the provider stops redelivering.
        Ok(_) => (StatusCode::OK, Json(WebhookAckResponse::received())).into_response(),
        Err(err) => webhook_error_response(err),
    }
}

fn webhook_error_response(err: WebhookError) -> axum::response::Response {
    warn!(code = err.code(), retryable = err.is_retryable(), "webhook rejected: {}", err);
    let body = ErrorResponse::new(err.code(), err.to_string());
    (err.status_code(), Json(body)).into_response()
}

/// GET /api/billing/entitlement - Current entitlement for the caller.
///
/// The UI polls this after sending the user to checkout; the webhook write
/// becomes visible here.
pub async fn get_entitlement(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.entitlement_handler();
    let view = handler
        .handle(GetEntitlementQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(EntitlementResponse {
        is_pro: view.is_pro,
    }))
}
