//! Router configuration for agenda endpoints.

use axum::routing::{delete, get, patch};
use axum::Router;

use super::super::AppState;
use super::handlers::{create_task, list_tasks, remove_task, update_task_status};

/// Agenda routes, mounted at `/api/tasks`.
pub fn agenda_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id/status", patch(update_task_status))
        .route("/:id", delete(remove_task))
}
