//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod cycle;
pub mod exercise;
pub mod session;
pub mod workout;

pub use cycle::{CreateCycle, CycleRecord, CycleRepository};
pub use exercise::{ExerciseRecord, ExerciseRepository};
pub use session::{CreateSession, SessionRecord, SessionRepository};
pub use workout::{
    CreateWorkout, CreateWorkoutSet, WorkoutRecord, WorkoutRepository, WorkoutSetRecord,
    WorkoutSetRepository,
};
