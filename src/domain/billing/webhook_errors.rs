//! Error taxonomy for payment webhook processing.
//!
//! Status codes steer the provider's redelivery: 2xx acknowledges, 4xx stops
//! retries, 5xx invites redelivery (safe, the upgrade is idempotent).

use axum::http::StatusCode;
use thiserror::Error;

/// Failures that can occur while handling a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature header absent, malformed, or verification failed. The
    /// request never reaches business logic.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// Event timestamp is older than the replay window.
    #[error("webhook timestamp outside tolerance")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("webhook timestamp in the future")]
    InvalidTimestamp,

    /// Payload or signature header could not be parsed.
    #[error("webhook parse error: {0}")]
    ParseError(String),

    /// Completed checkout carried no purchaser email.
    #[error("checkout session has no purchaser email")]
    MissingIdentity,

    /// No profile matches the purchaser email.
    #[error("no profile found for purchaser email")]
    UserNotFound,

    /// More than one profile matches the purchaser email. Never guess;
    /// reconcile manually.
    #[error("multiple profiles match purchaser email")]
    AmbiguousIdentity,

    /// Profile store write failed; the provider may redeliver.
    #[error("entitlement store failure: {0}")]
    Store(String),
}

impl WebhookError {
    /// Whether redelivering the same event could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WebhookError::Store(_))
    }

    /// HTTP status the webhook endpoint responds with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSignature
            | WebhookError::TimestampOutOfRange
            | WebhookError::InvalidTimestamp
            | WebhookError::ParseError(_)
            | WebhookError::MissingIdentity
            | WebhookError::UserNotFound
            | WebhookError::AmbiguousIdentity => StatusCode::BAD_REQUEST,

            WebhookError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for the response body and logs.
    pub fn code(&self) -> &'static str {
        match self {
            WebhookError::InvalidSignature => "INVALID_SIGNATURE",
            WebhookError::TimestampOutOfRange => "TIMESTAMP_OUT_OF_RANGE",
            WebhookError::InvalidTimestamp => "INVALID_TIMESTAMP",
            WebhookError::ParseError(_) => "PARSE_ERROR",
            WebhookError::MissingIdentity => "MISSING_IDENTITY",
            WebhookError::UserNotFound => "USER_NOT_FOUND",
            WebhookError::AmbiguousIdentity => "AMBIGUOUS_IDENTITY",
            WebhookError::Store(_) => "STORE_WRITE_FAILURE",
        }
    }
}
