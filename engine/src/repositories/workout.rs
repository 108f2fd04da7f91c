//! Logged workout repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Logged workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a logged workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub performed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a logged workout
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: CreateWorkout,
    ) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (performed_at, notes)
            VALUES ($1, $2)
            RETURNING id, performed_at, notes, created_at
            "#,
        )
        .bind(input.performed_at)
        .bind(&input.notes)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Get workout by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutRecord>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, performed_at, notes, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

/// Logged set record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutSetRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_name: String,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for logging a set
#[derive(Debug, Clone)]
pub struct CreateWorkoutSet {
    pub workout_id: Uuid,
    pub exercise_name: String,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
    pub completed: bool,
}

/// Logged set repository
pub struct WorkoutSetRepository;

impl WorkoutSetRepository {
    /// Log one set of a workout
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: CreateWorkoutSet,
    ) -> Result<WorkoutSetRecord> {
        let record = sqlx::query_as::<_, WorkoutSetRecord>(
            r#"
            INSERT INTO workout_sets (workout_id, exercise_name, set_number, weight, reps, completed)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, workout_id, exercise_name, set_number, weight, reps, completed, created_at
            "#,
        )
        .bind(input.workout_id)
        .bind(&input.exercise_name)
        .bind(input.set_number)
        .bind(input.weight)
        .bind(input.reps)
        .bind(input.completed)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Get the completed sets of a workout, heaviest first per exercise
    pub async fn get_completed_sets<'e>(
        executor: impl PgExecutor<'e>,
        workout_id: Uuid,
    ) -> Result<Vec<WorkoutSetRecord>> {
        let records = sqlx::query_as::<_, WorkoutSetRecord>(
            r#"
            SELECT id, workout_id, exercise_name, set_number, weight, reps, completed, created_at
            FROM workout_sets
            WHERE workout_id = $1 AND completed = TRUE
            ORDER BY exercise_name ASC, weight DESC
            "#,
        )
        .bind(workout_id)
        .fetch_all(executor)
        .await?;

        Ok(records)
    }
}
