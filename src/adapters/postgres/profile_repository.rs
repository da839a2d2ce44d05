//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::billing::UserProfile;
use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, ProfileId, Timestamp,
};
use crate::ports::ProfileRepository;

/// PostgreSQL-backed profile store.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a profile.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    is_pro: bool,
    payment_customer_ref: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            id: ProfileId::from_uuid(row.id),
            email: EmailAddress::new(&row.email).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("stored email is invalid: {}", e),
                )
            })?,
            is_pro: row.is_pro,
            payment_customer_ref: row.payment_customer_ref,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, email, is_pro, payment_customer_ref, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.email.as_str())
        .bind(profile.is_pro)
        .bind(&profile.payment_customer_ref)
        .bind(profile.created_at.as_datetime())
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to create profile: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<UserProfile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, email, is_pro, payment_customer_ref, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to load profile: {}", e)))?;

        row.map(UserProfile::try_from).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Vec<UserProfile>, DomainError> {
        // Emails are stored normalized, but compare case-insensitively in
        // case older rows predate normalization. Ordered for determinism.
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, email, is_pro, payment_customer_ref, created_at, updated_at
            FROM profiles
            WHERE lower(email) = $1
            ORDER BY created_at
            "#,
        )
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to query profiles: {}", e)))?;

        rows.into_iter().map(UserProfile::try_from).collect()
    }

    async fn upgrade_to_pro(
        &self,
        id: &ProfileId,
        customer_ref: Option<&str>,
    ) -> Result<(), DomainError> {
        // One atomic row update. COALESCE keeps an existing customer ref when
        // the event carried none; a present ref overwrites.
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET is_pro = TRUE,
                payment_customer_ref = COALESCE($2, payment_customer_ref),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(customer_ref)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to upgrade profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                "profile disappeared before upgrade",
            ));
        }

        Ok(())
    }
}
