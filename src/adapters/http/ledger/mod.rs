//! HTTP adapter for the transaction ledger.

mod dto;
mod handlers;
mod routes;

pub use routes::ledger_routes;
