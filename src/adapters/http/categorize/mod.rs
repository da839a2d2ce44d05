//! HTTP adapter for transaction categorization.

mod dto;
mod handlers;
mod routes;

pub use routes::categorize_routes;
