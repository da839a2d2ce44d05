//! UpdateTaskStatusHandler - Moves a task between workflow states.

use std::sync::Arc;

use crate::domain::agenda::{AgendaTask, TaskStatus};
use crate::domain::foundation::{DomainError, ProfileId, TaskId};
use crate::ports::TaskRepository;

/// Command to change a task's status.
#[derive(Debug, Clone)]
pub struct UpdateTaskStatusCommand {
    pub user_id: ProfileId,
    pub task_id: TaskId,
    pub status: TaskStatus,
}

/// Handler for status changes.
pub struct UpdateTaskStatusHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl UpdateTaskStatusHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: UpdateTaskStatusCommand) -> Result<AgendaTask, DomainError> {
        self.tasks
            .update_status(&cmd.user_id, &cmd.task_id, cmd.status)
            .await
    }
}
