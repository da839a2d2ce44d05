//! PostgreSQL implementation of TaskRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::agenda::{AgendaTask, TaskStatus};
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, TaskId, Timestamp};
use crate::ports::TaskRepository;

/// PostgreSQL-backed task store.
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a task.
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    user_id: Uuid,
    date: NaiveDate,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for AgendaTask {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::from_storage_key(&row.status).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("invalid status value: {}", row.status),
            )
        })?;

        Ok(AgendaTask {
            id: TaskId::from_uuid(row.id),
            user_id: ProfileId::from_uuid(row.user_id),
            date: row.date,
            description: row.description,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &AgendaTask) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, user_id, date, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(task.id.as_uuid())
        .bind(task.user_id.as_uuid())
        .bind(task.date)
        .bind(&task.description)
        .bind(task.status.storage_key())
        .bind(task.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to save task: {}", e)))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &ProfileId) -> Result<Vec<AgendaTask>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, date, description, status, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY date, created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to list tasks: {}", e)))?;

        rows.into_iter().map(AgendaTask::try_from).collect()
    }

    async fn update_status(
        &self,
        user_id: &ProfileId,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<AgendaTask, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            UPDATE tasks
            SET status = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, date, description, status, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(status.storage_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to update task: {}", e)))?;

        row.ok_or_else(|| DomainError::new(ErrorCode::TaskNotFound, "task not found"))?
            .try_into()
    }

    async fn delete(&self, user_id: &ProfileId, id: &TaskId) -> Result<(), DomainError> {
        let result = sqlx::query(r#"DELETE FROM tasks WHERE id = $1 AND user_id = $2"#)
            .bind(id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to delete task: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::TaskNotFound, "task not found"));
        }

        Ok(())
    }
}
