//! HTTP adapter for the task calendar.

mod dto;
mod handlers;
mod routes;

pub use routes::agenda_routes;
