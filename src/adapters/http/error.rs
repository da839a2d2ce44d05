//! Shared HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// API error wrapping a domain error with its HTTP mapping.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::ValidationError> for ApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }

            ErrorCode::ProfileNotFound
            | ErrorCode::TransactionNotFound
            | ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,

            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,

            // Entitlement walls surface as 402 so the UI knows to show the
            // upgrade prompt.
            ErrorCode::PlanLimitReached | ErrorCode::ProRequired => StatusCode::PAYMENT_REQUIRED,

            ErrorCode::GenerationFailed => StatusCode::BAD_GATEWAY,

            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(code: ErrorCode) -> StatusCode {
        ApiError(DomainError::new(code, "x"))
            .into_response()
            .status()
    }

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_of(ErrorCode::ProfileNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ErrorCode::TaskNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn entitlement_walls_map_to_402() {
        assert_eq!(
            status_of(ErrorCode::PlanLimitReached),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(status_of(ErrorCode::ProRequired), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn validation_maps_to_400_and_database_to_500() {
        assert_eq!(status_of(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
