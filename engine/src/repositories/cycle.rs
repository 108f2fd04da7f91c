//! Program cycle repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use liftplan_shared::models::OneRmValues;

/// Program cycle record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CycleRecord {
    pub id: Uuid,
    pub program_slug: String,
    pub status: String,
    pub starting_squat_1rm: Option<f64>,
    pub starting_bench_1rm: Option<f64>,
    pub starting_deadlift_1rm: Option<f64>,
    pub starting_ohp_1rm: Option<f64>,
    pub current_squat_1rm: f64,
    pub current_bench_1rm: f64,
    pub current_deadlift_1rm: f64,
    pub current_ohp_1rm: f64,
    pub current_week: i32,
    pub current_session: i32,
    pub total_sessions_planned: i32,
    pub total_sessions_completed: i32,
    pub started_at: DateTime<Utc>,
    pub first_session_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CycleRecord {
    pub fn current_one_rms(&self) -> OneRmValues {
        OneRmValues::new(
            self.current_squat_1rm,
            self.current_bench_1rm,
            self.current_deadlift_1rm,
            self.current_ohp_1rm,
        )
    }

    pub fn starting_one_rms(&self) -> Option<OneRmValues> {
        match (
            self.starting_squat_1rm,
            self.starting_bench_1rm,
            self.starting_deadlift_1rm,
            self.starting_ohp_1rm,
        ) {
            (Some(squat), Some(bench), Some(deadlift), Some(ohp)) => {
                Some(OneRmValues::new(squat, bench, deadlift, ohp))
            }
            _ => None,
        }
    }
}

/// Input for creating a cycle
#[derive(Debug, Clone)]
pub struct CreateCycle {
    pub program_slug: String,
    pub one_rms: OneRmValues,
    pub total_sessions_planned: i32,
    pub started_at: DateTime<Utc>,
    pub first_session_date: Option<NaiveDate>,
}

const CYCLE_COLUMNS: &str = r#"id, program_slug, status,
           starting_squat_1rm, starting_bench_1rm, starting_deadlift_1rm, starting_ohp_1rm,
           current_squat_1rm, current_bench_1rm, current_deadlift_1rm, current_ohp_1rm,
           current_week, current_session, total_sessions_planned, total_sessions_completed,
           started_at, first_session_date, completed_at, created_at, updated_at"#;

/// Program cycle repository
pub struct CycleRepository;

impl CycleRepository {
    /// Create a new cycle in active status
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: CreateCycle,
    ) -> Result<CycleRecord> {
        let record = sqlx::query_as::<_, CycleRecord>(&format!(
            r#"
            INSERT INTO user_program_cycles
                (program_slug, status,
                 current_squat_1rm, current_bench_1rm, current_deadlift_1rm, current_ohp_1rm,
                 current_week, current_session, total_sessions_planned, total_sessions_completed,
                 started_at, first_session_date)
            VALUES ($1, 'active', $2, $3, $4, $5, 1, 1, $6, 0, $7, $8)
            RETURNING {CYCLE_COLUMNS}
            "#,
        ))
        .bind(&input.program_slug)
        .bind(input.one_rms.squat)
        .bind(input.one_rms.bench)
        .bind(input.one_rms.deadlift)
        .bind(input.one_rms.overhead_press)
        .bind(input.total_sessions_planned)
        .bind(input.started_at)
        .bind(input.first_session_date)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Get cycle by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CycleRecord>> {
        let record = sqlx::query_as::<_, CycleRecord>(&format!(
            r#"
            SELECT {CYCLE_COLUMNS}
            FROM user_program_cycles
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get cycle by ID with a row lock, for use inside a transaction
    pub async fn get_by_id_for_update<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<CycleRecord>> {
        let record = sqlx::query_as::<_, CycleRecord>(&format!(
            r#"
            SELECT {CYCLE_COLUMNS}
            FROM user_program_cycles
            WHERE id = $1
            FOR UPDATE
            "#,
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(record)
    }

    /// List all non-deleted cycles, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<CycleRecord>> {
        let records = sqlx::query_as::<_, CycleRecord>(&format!(
            r#"
            SELECT {CYCLE_COLUMNS}
            FROM user_program_cycles
            WHERE status != 'deleted'
            ORDER BY started_at DESC
            "#,
        ))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update progress counters and status after a session completion
    #[allow(clippy::too_many_arguments)]
    pub async fn update_progress<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
        current_week: i32,
        current_session: i32,
        total_sessions_completed: i32,
        status: &str,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<CycleRecord> {
        let record = sqlx::query_as::<_, CycleRecord>(&format!(
            r#"
            UPDATE user_program_cycles
            SET current_week = $2, current_session = $3, total_sessions_completed = $4,
                status = $5, completed_at = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {CYCLE_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(current_week)
        .bind(current_session)
        .bind(total_sessions_completed)
        .bind(status)
        .bind(completed_at)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Overwrite the working maxes after a retest
    pub async fn update_current_one_rms<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
        one_rms: OneRmValues,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_program_cycles
            SET current_squat_1rm = $2, current_bench_1rm = $3,
                current_deadlift_1rm = $4, current_ohp_1rm = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(one_rms.squat)
        .bind(one_rms.bench)
        .bind(one_rms.deadlift)
        .bind(one_rms.overhead_press)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Record the pre-retest maxes, only if not yet captured
    pub async fn set_starting_one_rms_if_unset<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
        one_rms: OneRmValues,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_program_cycles
            SET starting_squat_1rm = $2, starting_bench_1rm = $3,
                starting_deadlift_1rm = $4, starting_ohp_1rm = $5, updated_at = NOW()
            WHERE id = $1 AND starting_squat_1rm IS NULL
            "#,
        )
        .bind(id)
        .bind(one_rms.squat)
        .bind(one_rms.bench)
        .bind(one_rms.deadlift)
        .bind(one_rms.overhead_press)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Soft-delete a cycle; returns false if it was already deleted or
    /// does not exist
    pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE user_program_cycles
            SET status = 'deleted', updated_at = NOW()
            WHERE id = $1 AND status != 'deleted'
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
