//! Adapters - Implementations of the ports against real infrastructure.
//!
//! - `http` - axum REST API
//! - `postgres` - sqlx repository implementations
//! - `ai` - Gemini text generation client (and a mock for tests)

pub mod ai;
pub mod http;
pub mod postgres;
