//! Exercise catalog repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Get or create an exercise by name. The dummy update makes the
    /// conflicting row visible to RETURNING.
    pub async fn find_or_create<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Get exercise by name
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<Option<ExerciseRecord>> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, created_at
            FROM exercises
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
