//! Request/response DTOs for agenda endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::agenda::{AgendaTask, TaskStatus};

/// Body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub date: NaiveDate,
    pub description: String,
}

/// Body for changing a task's status.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

/// One task as returned to clients.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub status: TaskStatus,
}

impl From<AgendaTask> for TaskResponse {
    fn from(task: AgendaTask) -> Self {
        Self {
            id: task.id.to_string(),
            date: task.date,
            description: task.description,
            status: task.status,
        }
    }
}

/// Listing wrapper.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}
