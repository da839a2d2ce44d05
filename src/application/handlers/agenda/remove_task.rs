//! RemoveTaskHandler - Deletes a task from the calendar.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId, TaskId};
use crate::ports::TaskRepository;

/// Command to delete a task.
#[derive(Debug, Clone)]
pub struct RemoveTaskCommand {
    pub user_id: ProfileId,
    pub task_id: TaskId,
}

/// Handler for task deletion.
pub struct RemoveTaskHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl RemoveTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: RemoveTaskCommand) -> Result<(), DomainError> {
        self.tasks.delete(&cmd.user_id, &cmd.task_id).await
    }
}
