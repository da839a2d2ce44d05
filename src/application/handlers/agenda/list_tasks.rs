//! ListTasksHandler - Query handler for a user's calendar.

use std::sync::Arc;

use crate::domain::agenda::AgendaTask;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::ports::TaskRepository;

/// Query for a user's tasks.
#[derive(Debug, Clone)]
pub struct ListTasksQuery {
    pub user_id: ProfileId,
}

/// Handler for task listings.
pub struct ListTasksHandler {
    tasks: Arc<dyn TaskRepository>,
}

impl ListTasksHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn handle(&self, query: ListTasksQuery) -> Result<Vec<AgendaTask>, DomainError> {
        self.tasks.list_for_user(&query.user_id).await
    }
}
