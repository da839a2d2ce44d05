//! Agenda command and query handlers.

mod create_task;
mod list_tasks;
mod remove_task;
mod update_task_status;

pub use create_task::{CreateTaskCommand, CreateTaskHandler};
pub use list_tasks::{ListTasksHandler, ListTasksQuery};
pub use remove_task::{RemoveTaskCommand, RemoveTaskHandler};
pub use update_task_status::{UpdateTaskStatusCommand, UpdateTaskStatusHandler};
