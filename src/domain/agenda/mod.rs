//! Agenda domain module - calendar tasks.

mod task;

pub use task::{AgendaTask, TaskStatus};
