//! PostgreSQL adapters - sqlx implementations of the repository ports.

mod profile_repository;
mod task_repository;
mod transaction_repository;

pub use profile_repository::PostgresProfileRepository;
pub use task_repository::PostgresTaskRepository;
pub use transaction_repository::PostgresTransactionRepository;
