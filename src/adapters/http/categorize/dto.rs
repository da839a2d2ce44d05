//! Request/response DTOs for the categorization endpoint.

use serde::{Deserialize, Serialize};

/// `{"description": "..."}`.
#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    #[serde(default)]
    pub description: String,
}

/// `{"category": "..."}` where the value is always a closed-set label.
#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub category: String,
}

/// `{"error": "..."}` - the categorization endpoint's historical error shape.
#[derive(Debug, Serialize)]
pub struct CategorizeErrorResponse {
    pub error: String,
}
