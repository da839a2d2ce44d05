//! HTTP handlers for agenda endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::application::handlers::agenda::{
    CreateTaskCommand, ListTasksQuery, RemoveTaskCommand, UpdateTaskStatusCommand,
};
use crate::domain::foundation::TaskId;

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::AppState;
use super::dto::{CreateTaskRequest, TaskListResponse, TaskResponse, UpdateTaskStatusRequest};

/// GET /api/tasks - List the caller's tasks.
pub async fn list_tasks(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_tasks_handler();
    let tasks = handler
        .handle(ListTasksQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

/// POST /api/tasks - Create a task.
pub async fn create_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_task_handler();
    let task = handler
        .handle(CreateTaskCommand {
            user_id: user.user_id,
            date: request.date,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// PATCH /api/tasks/:id/status - Move a task between workflow states.
pub async fn update_task_status(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<TaskId>,
    Json(request): Json<UpdateTaskStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.update_task_status_handler();
    let task = handler
        .handle(UpdateTaskStatusCommand {
            user_id: user.user_id,
            task_id: id,
            status: request.status,
        })
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /api/tasks/:id - Remove a task.
pub async fn remove_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<TaskId>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.remove_task_handler();
    handler
        .handle(RemoveTaskCommand {
            user_id: user.user_id,
            task_id: id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
