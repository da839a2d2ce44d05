//! PostgreSQL implementation of TransactionRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, ProfileId, Timestamp, TransactionId,
};
use crate::domain::ledger::{Category, Transaction, TransactionKind};
use crate::ports::{TransactionFilter, TransactionRepository};

/// PostgreSQL-backed transaction store.
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a transaction.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    user_id: Uuid,
    date: NaiveDate,
    description: String,
    amount: f64,
    kind: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let kind = TransactionKind::from_storage_key(&row.kind).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("invalid kind value: {}", row.kind),
            )
        })?;
        let category = Category::parse(&row.category).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("invalid category value: {}", row.category),
            )
        })?;

        Ok(Transaction {
            id: TransactionId::from_uuid(row.id),
            user_id: ProfileId::from_uuid(row.user_id),
            date: row.date,
            description: row.description,
            amount: row.amount,
            kind,
            category,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn bind_insert<'q>(
    query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    tx: &'q Transaction,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    query
        .bind(tx.id.as_uuid())
        .bind(tx.user_id.as_uuid())
        .bind(tx.date)
        .bind(&tx.description)
        .bind(tx.amount)
        .bind(tx.kind.storage_key())
        .bind(tx.category.storage_key())
        .bind(tx.created_at.as_datetime())
}

const INSERT_SQL: &str = r#"
    INSERT INTO transactions (id, user_id, date, description, amount, kind, category, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError> {
        bind_insert(sqlx::query(INSERT_SQL), transaction)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to save transaction: {}", e)))?;

        Ok(())
    }

    async fn save_all(&self, transactions: &[Transaction]) -> Result<(), DomainError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("failed to open transaction: {}", e)))?;

        for transaction in transactions {
            bind_insert(sqlx::query(INSERT_SQL), transaction)
                .execute(&mut *db_tx)
                .await
                .map_err(|e| {
                    DomainError::database(format!("failed to import transaction: {}", e))
                })?;
        }

        db_tx
            .commit()
            .await
            .map_err(|e| DomainError::database(format!("failed to commit import: {}", e)))?;

        Ok(())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET date = $3, description = $4, amount = $5, kind = $6, category = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(transaction.user_id.as_uuid())
        .bind(transaction.date)
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.kind.storage_key())
        .bind(transaction.category.storage_key())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to update transaction: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "transaction not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, user_id: &ProfileId, id: &TransactionId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"DELETE FROM transactions WHERE id = $1 AND user_id = $2"#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to delete transaction: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "transaction not found",
            ));
        }

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &ProfileId,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, date, description, amount, kind, category, created_at
            FROM transactions
            WHERE user_id = $1
              AND ($2::int IS NULL OR EXTRACT(MONTH FROM date) = $2)
              AND ($3::int IS NULL OR EXTRACT(YEAR FROM date) = $3)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(filter.month.map(|m| m as i32))
        .bind(filter.year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to list transactions: {}", e)))?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn count_by_kind(
        &self,
        user_id: &ProfileId,
        kind: TransactionKind,
    ) -> Result<u32, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM transactions WHERE user_id = $1 AND kind = $2"#,
        )
        .bind(user_id.as_uuid())
        .bind(kind.storage_key())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to count transactions: {}", e)))?;

        Ok(count as u32)
    }
}
