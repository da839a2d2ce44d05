//! Calendar task entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, TaskId, Timestamp, ValidationError};

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Storage key used in the database.
    pub fn storage_key(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Parses a storage key.
    pub fn from_storage_key(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A dated to-do item on the user's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaTask {
    pub id: TaskId,
    pub user_id: ProfileId,
    pub date: NaiveDate,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

impl AgendaTask {
    /// Creates a task in the `Todo` state.
    pub fn new(
        user_id: ProfileId,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self {
            id: TaskId::new(),
            user_id,
            date,
            description,
            status: TaskStatus::Todo,
            created_at: Timestamp::now(),
        })
    }

    /// Moves the task to a new status. Any transition is allowed; status is
    /// a user-facing label, not a state machine.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
