//! TaskRepository port - Persistent storage for agenda tasks.

use async_trait::async_trait;

use crate::domain::agenda::{AgendaTask, TaskStatus};
use crate::domain::foundation::{DomainError, ProfileId, TaskId};

/// Port for storing and querying agenda tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts one task.
    async fn save(&self, task: &AgendaTask) -> Result<(), DomainError>;

    /// Lists a user's tasks ordered by date.
    async fn list_for_user(&self, user_id: &ProfileId) -> Result<Vec<AgendaTask>, DomainError>;

    /// Updates the status of a task owned by `user_id`. Returns the updated
    /// task, or `TaskNotFound`.
    async fn update_status(
        &self,
        user_id: &ProfileId,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<AgendaTask, DomainError>;

    /// Deletes a task owned by `user_id`.
    async fn delete(&self, user_id: &ProfileId, id: &TaskId) -> Result<(), DomainError>;
}
