//! Scheduled session repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Scheduled session record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: Uuid,
    pub cycle_id: Uuid,
    pub week_number: i32,
    pub session_number: i32,
    pub session_name: String,
    pub payload: serde_json::Value,
    pub completed: bool,
    pub workout_id: Option<Uuid>,
    pub scheduled_date: NaiveDate,
    pub time_of_day: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a scheduled session
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub cycle_id: Uuid,
    pub week_number: i32,
    pub session_number: i32,
    pub session_name: String,
    pub payload: serde_json::Value,
    pub scheduled_date: NaiveDate,
    pub time_of_day: Option<String>,
}

const SESSION_COLUMNS: &str = r#"id, cycle_id, week_number, session_number, session_name,
           payload, completed, workout_id, scheduled_date, time_of_day, created_at"#;

/// Scheduled session repository
pub struct SessionRepository;

impl SessionRepository {
    /// Insert one scheduled session
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: CreateSession,
    ) -> Result<SessionRecord> {
        let record = sqlx::query_as::<_, SessionRecord>(&format!(
            r#"
            INSERT INTO scheduled_sessions
                (cycle_id, week_number, session_number, session_name, payload,
                 scheduled_date, time_of_day)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SESSION_COLUMNS}
            "#,
        ))
        .bind(input.cycle_id)
        .bind(input.week_number)
        .bind(input.session_number)
        .bind(&input.session_name)
        .bind(&input.payload)
        .bind(input.scheduled_date)
        .bind(&input.time_of_day)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Get session by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SessionRecord>> {
        let record = sqlx::query_as::<_, SessionRecord>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM scheduled_sessions
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get session by ID with a row lock, for use inside a transaction
    pub async fn get_by_id_for_update<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<SessionRecord>> {
        let record = sqlx::query_as::<_, SessionRecord>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM scheduled_sessions
            WHERE id = $1
            FOR UPDATE
            "#,
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(record)
    }

    /// Get all sessions of a cycle in program order
    pub async fn get_by_cycle(pool: &PgPool, cycle_id: Uuid) -> Result<Vec<SessionRecord>> {
        let records = sqlx::query_as::<_, SessionRecord>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM scheduled_sessions
            WHERE cycle_id = $1
            ORDER BY week_number ASC, session_number ASC
            "#,
        ))
        .bind(cycle_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Mark a session completed, optionally linking the logged workout
    pub async fn mark_completed<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
        workout_id: Option<Uuid>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE scheduled_sessions
            SET completed = TRUE, workout_id = COALESCE($2, workout_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(workout_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Count completed sessions of a cycle
    pub async fn count_completed<'e>(executor: impl PgExecutor<'e>, cycle_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM scheduled_sessions
            WHERE cycle_id = $1 AND completed = TRUE
            "#,
        )
        .bind(cycle_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Earliest incomplete session of a cycle in program order, if any
    pub async fn first_incomplete<'e>(
        executor: impl PgExecutor<'e>,
        cycle_id: Uuid,
    ) -> Result<Option<(i32, i32)>> {
        let row = sqlx::query_as::<_, (i32, i32)>(
            r#"
            SELECT week_number, session_number
            FROM scheduled_sessions
            WHERE cycle_id = $1 AND completed = FALSE
            ORDER BY week_number ASC, session_number ASC
            LIMIT 1
            "#,
        )
        .bind(cycle_id)
        .fetch_optional(executor)
        .await?;

        Ok(row)
    }
}
