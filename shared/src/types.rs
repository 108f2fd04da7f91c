//! Engine request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    CycleStatus, OneRmValues, PrescribedExercise, TimeOfDay, WorkoutAccessory,
};

/// Request to start a new program cycle.
///
/// Dates are plain calendar dates (`YYYY-MM-DD`); weekday tokens are
/// lowercase day names ("monday") or three-letter abbreviations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartCycleRequest {
    #[validate(length(min = 1))]
    pub program_slug: String,
    pub one_rms: OneRmValues,
    #[validate(
        length(min = 1, message = "At least one preferred training day is required"),
        custom(function = "crate::validation::validate_weekday_tokens")
    )]
    pub preferred_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time_of_day: Option<TimeOfDay>,
    pub start_date: NaiveDate,
    /// Pins the very first session to an exact date regardless of
    /// weekday preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_first_session_date: Option<NaiveDate>,
}

/// A user's program cycle as reported to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleResponse {
    pub id: Uuid,
    pub program_slug: String,
    pub status: CycleStatus,
    /// 1RMs captured at the first retest, so progress over the cycle
    /// survives mid-cycle edits. Absent until a retest happens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_one_rms: Option<OneRmValues>,
    pub current_one_rms: OneRmValues,
    pub current_week: u32,
    pub current_session: u32,
    pub total_sessions_planned: u32,
    pub total_sessions_completed: u32,
    pub is_complete: bool,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_session_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// One scheduled session row as reported to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSessionResponse {
    pub id: Uuid,
    pub week_number: u32,
    pub session_number: u32,
    pub session_name: String,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<Uuid>,
}

/// A cycle together with all of its scheduled sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleDetailResponse {
    pub cycle: CycleResponse,
    pub sessions: Vec<ScheduledSessionResponse>,
}

/// A scheduled session with its prescription parsed out of storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetailResponse {
    pub session: ScheduledSessionResponse,
    pub exercises: Vec<PrescribedExercise>,
    pub accessories: Vec<WorkoutAccessory>,
}
