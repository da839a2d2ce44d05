//! CreateTaskHandler - Adds a task to the calendar.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::agenda::AgendaTask;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::ports::TaskRepository;

/// Command to create a task.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub user_id: ProfileId,
    pub date: NaiveDate,
    pub description: String,
}

/// Handler for task creation.
pub struct CreateTaskHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl CreateTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, cmd: CreateTaskCommand) -> Result<AgendaTask, DomainError> {
        let task = AgendaTask::new(cmd.user_id, cmd.date, cmd.description)?;
        self.tasks.save(&task).await?;
        Ok(task)
    }
}
