//! HTTP handler for the categorization endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use super::super::AppState;
use super::dto::{CategorizeErrorResponse, CategorizeRequest, CategorizeResponse};

/// POST /api/categorize - Label a transaction description.
///
/// An empty description is the only client error; everything downstream
/// (model failure, off-list reply) degrades to the `Other` label with a
/// success status.
pub async fn categorize_transaction(
    State(state): State<AppState>,
    Json(request): Json<CategorizeRequest>,
) -> axum::response::Response {
    if request.description.trim().is_empty() {
        let body = CategorizeErrorResponse {
            error: "Description is required".to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let handler = state.categorize_handler();
    let category = handler.handle(&request.description).await;

    let body = CategorizeResponse {
        category: category.label().to_string(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
