//! HTTP adapter for billing: the webhook endpoint and the entitlement poll.

mod dto;
mod handlers;
mod routes;

pub use routes::{billing_routes, webhook_routes};
