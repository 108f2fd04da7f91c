//! Program cycle service
//!
//! Owns the cycle lifecycle: starting a cycle (generate, schedule,
//! persist), reporting progress, marking sessions complete, and
//! re-baselining the working maxes after a 1RM retest session.

use anyhow::anyhow;
use chrono::{DateTime, Utc, Weekday};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use liftplan_shared::models::{CycleStatus, LiftType, OneRmValues, TimeOfDay};
use liftplan_shared::types::{
    CycleDetailResponse, CycleResponse, ScheduledSessionResponse, SessionDetailResponse,
    StartCycleRequest,
};
use liftplan_shared::validation::{parse_weekday, validate_one_rm};

use crate::error::{EngineError, EngineResult};
use crate::repositories::{
    CreateCycle, CreateSession, CycleRecord, CycleRepository, ExerciseRepository, SessionRecord,
    SessionRepository, WorkoutSetRecord, WorkoutSetRepository,
};
use crate::scheduler::{self, SchedulePreferences};
use crate::services::payload;
use crate::services::program::ProgramService;

/// Session name that marks a max-test session; completing one
/// re-baselines the cycle's working maxes.
const RETEST_SESSION_NAME: &str = "1RM Test";

/// Program cycle service for business logic
pub struct CycleService;

impl CycleService {
    /// Start a new cycle: generate the full program, lay it onto the
    /// calendar, and persist cycle plus sessions in one transaction.
    pub async fn start_cycle(
        pool: &PgPool,
        request: StartCycleRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<CycleDetailResponse> {
        request
            .validate()
            .map_err(|e| EngineError::Validation(e.to_string()))?;
        for lift in LiftType::MAIN_LIFTS {
            validate_one_rm(request.one_rms.value_for(lift)).map_err(|e| {
                EngineError::Validation(format!("{}: {e}", lift.display_name()))
            })?;
        }

        let program = ProgramService::get_program(&request.program_slug)?;
        let info = program.info();

        let preferred_days: Vec<Weekday> = request
            .preferred_days
            .iter()
            .map(|token| {
                parse_weekday(token).ok_or_else(|| {
                    EngineError::Validation(format!("unknown weekday token `{token}`"))
                })
            })
            .collect::<EngineResult<_>>()?;

        if !request.one_rms.any_nonzero() {
            warn!(
                slug = %info.slug,
                "starting cycle with no recorded 1RMs; all targets will be zero"
            );
        }
        if (preferred_days.len() as u8) < info.days_per_week {
            warn!(
                slug = %info.slug,
                preferred = preferred_days.len(),
                per_week = info.days_per_week,
                "fewer preferred days than sessions per week; weeks will spill over"
            );
        }

        let workouts = program.generate_workouts(&request.one_rms);
        let schedule = scheduler::generate_schedule(
            &workouts,
            request.start_date,
            &SchedulePreferences {
                preferred_days,
                preferred_time_of_day: request.preferred_time_of_day,
                force_first_session_date: request.force_first_session_date,
            },
        )?;

        let mut tx = pool.begin().await?;

        let mut exercise_names: Vec<&str> = schedule
            .iter()
            .flat_map(|s| s.workout.exercises.iter().map(|e| e.name.as_str()))
            .collect();
        exercise_names.sort_unstable();
        exercise_names.dedup();
        for name in exercise_names {
            ExerciseRepository::find_or_create(&mut *tx, name)
                .await
                .map_err(EngineError::Internal)?;
        }

        let cycle = CycleRepository::create(
            &mut *tx,
            CreateCycle {
                program_slug: info.slug.clone(),
                one_rms: request.one_rms,
                total_sessions_planned: info.total_sessions as i32,
                started_at: now,
                first_session_date: schedule.first().map(|s| s.scheduled_date),
            },
        )
        .await
        .map_err(EngineError::Internal)?;

        let mut sessions = Vec::with_capacity(schedule.len());
        for scheduled in &schedule {
            let record = SessionRepository::create(
                &mut *tx,
                CreateSession {
                    cycle_id: cycle.id,
                    week_number: scheduled.workout.week_number as i32,
                    session_number: scheduled.workout.session_number as i32,
                    session_name: scheduled.workout.session_name.clone(),
                    payload: payload::payload_json(&scheduled.workout)?,
                    scheduled_date: scheduled.scheduled_date,
                    time_of_day: scheduled.time_of_day.map(|t| t.as_str().to_string()),
                },
            )
            .await
            .map_err(EngineError::Internal)?;
            sessions.push(record);
        }

        tx.commit().await?;

        info!(
            cycle_id = %cycle.id,
            slug = %info.slug,
            sessions = sessions.len(),
            "cycle started"
        );

        Ok(CycleDetailResponse {
            cycle: Self::cycle_response(&cycle)?,
            sessions: sessions
                .iter()
                .map(Self::session_response)
                .collect::<EngineResult<_>>()?,
        })
    }

    /// Get a cycle with all of its scheduled sessions
    pub async fn get_cycle(pool: &PgPool, id: Uuid) -> EngineResult<CycleDetailResponse> {
        let cycle = CycleRepository::get_by_id(pool, id)
            .await
            .map_err(EngineError::Internal)?
            .ok_or_else(|| EngineError::NotFound(format!("cycle {id} does not exist")))?;
        let sessions = SessionRepository::get_by_cycle(pool, id)
            .await
            .map_err(EngineError::Internal)?;

        Ok(CycleDetailResponse {
            cycle: Self::cycle_response(&cycle)?,
            sessions: sessions
                .iter()
                .map(Self::session_response)
                .collect::<EngineResult<_>>()?,
        })
    }

    /// List all non-deleted cycles, newest first
    pub async fn list_cycles(pool: &PgPool) -> EngineResult<Vec<CycleResponse>> {
        let records = CycleRepository::list(pool)
            .await
            .map_err(EngineError::Internal)?;
        records.iter().map(Self::cycle_response).collect()
    }

    /// Get one scheduled session with its prescription parsed out of
    /// storage
    pub async fn session_detail(pool: &PgPool, session_id: Uuid) -> EngineResult<SessionDetailResponse> {
        let record = SessionRepository::get_by_id(pool, session_id)
            .await
            .map_err(EngineError::Internal)?
            .ok_or_else(|| EngineError::NotFound(format!("session {session_id} does not exist")))?;
        let (exercises, accessories) = payload::parse_session_payload(&record.payload)?;

        Ok(SessionDetailResponse {
            session: Self::session_response(&record)?,
            exercises,
            accessories,
        })
    }

    /// Mark a scheduled session complete and advance the cycle.
    ///
    /// Idempotent: completing an already-completed session changes
    /// nothing. Completing the final session closes the cycle, and
    /// completing a max-test session re-baselines the working maxes
    /// from the logged sets.
    pub async fn mark_session_complete(
        pool: &PgPool,
        session_id: Uuid,
        workout_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> EngineResult<CycleResponse> {
        let mut tx = pool.begin().await?;

        let session = SessionRepository::get_by_id_for_update(&mut *tx, session_id)
            .await
            .map_err(EngineError::Internal)?
            .ok_or_else(|| EngineError::NotFound(format!("session {session_id} does not exist")))?;
        let cycle = CycleRepository::get_by_id_for_update(&mut *tx, session.cycle_id)
            .await
            .map_err(EngineError::Internal)?
            .ok_or_else(|| {
                EngineError::NotFound(format!("cycle {} does not exist", session.cycle_id))
            })?;
        if cycle.status == CycleStatus::Deleted.as_str() {
            return Err(EngineError::NotFound(format!(
                "cycle {} does not exist",
                cycle.id
            )));
        }

        if session.completed {
            tx.rollback().await?;
            return Self::cycle_response(&cycle);
        }

        SessionRepository::mark_completed(&mut *tx, session.id, workout_id)
            .await
            .map_err(EngineError::Internal)?;

        if session.session_name == RETEST_SESSION_NAME {
            if let Some(wid) = workout_id.or(session.workout_id) {
                let sets = WorkoutSetRepository::get_completed_sets(&mut *tx, wid)
                    .await
                    .map_err(EngineError::Internal)?;
                Self::apply_retest(&mut tx, &cycle, &sets).await?;
            } else {
                warn!(
                    session_id = %session.id,
                    "max-test session completed without a logged workout; maxes unchanged"
                );
            }
        }

        let completed = SessionRepository::count_completed(&mut *tx, cycle.id)
            .await
            .map_err(EngineError::Internal)? as i32;
        let next = SessionRepository::first_incomplete(&mut *tx, cycle.id)
            .await
            .map_err(EngineError::Internal)?;

        let (current_week, current_session) =
            next.unwrap_or((cycle.current_week, cycle.current_session));
        let (status, completed_at) = if completed >= cycle.total_sessions_planned {
            (CycleStatus::Completed, cycle.completed_at.or(Some(now)))
        } else {
            (CycleStatus::Active, None)
        };

        let updated = CycleRepository::update_progress(
            &mut *tx,
            cycle.id,
            current_week,
            current_session,
            completed,
            status.as_str(),
            completed_at,
        )
        .await
        .map_err(EngineError::Internal)?;

        tx.commit().await?;

        info!(
            cycle_id = %updated.id,
            completed_sessions = completed,
            status = %updated.status,
            "session completed"
        );
        Self::cycle_response(&updated)
    }

    /// Soft-delete a cycle; its sessions stay on record
    pub async fn delete_cycle(pool: &PgPool, id: Uuid) -> EngineResult<()> {
        let deleted = CycleRepository::soft_delete(pool, id)
            .await
            .map_err(EngineError::Internal)?;
        if !deleted {
            return Err(EngineError::NotFound(format!("cycle {id} does not exist")));
        }
        info!(cycle_id = %id, "cycle deleted");
        Ok(())
    }

    /// Fold the retest results into the cycle's maxes. Untested lifts
    /// keep their previous values; the pre-retest maxes are captured
    /// once as the cycle's starting point.
    async fn apply_retest(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        cycle: &CycleRecord,
        sets: &[WorkoutSetRecord],
    ) -> EngineResult<()> {
        let tested = extract_tested_maxes(sets);
        if !tested.any_nonzero() {
            warn!(cycle_id = %cycle.id, "max-test workout had no usable sets; maxes unchanged");
            return Ok(());
        }

        CycleRepository::set_starting_one_rms_if_unset(&mut **tx, cycle.id, cycle.current_one_rms())
            .await
            .map_err(EngineError::Internal)?;

        let mut merged = cycle.current_one_rms();
        for lift in LiftType::MAIN_LIFTS {
            let new = tested.value_for(lift);
            if new > 0.0 {
                merged.set_for(lift, new);
            }
        }
        CycleRepository::update_current_one_rms(&mut **tx, cycle.id, merged)
            .await
            .map_err(EngineError::Internal)?;

        info!(
            cycle_id = %cycle.id,
            squat = merged.squat,
            bench = merged.bench,
            deadlift = merged.deadlift,
            overhead_press = merged.overhead_press,
            "working maxes re-baselined from retest"
        );
        Ok(())
    }

    fn cycle_response(record: &CycleRecord) -> EngineResult<CycleResponse> {
        let status: CycleStatus = record
            .status
            .parse()
            .map_err(|e: String| EngineError::Internal(anyhow!(e)))?;
        Ok(CycleResponse {
            id: record.id,
            program_slug: record.program_slug.clone(),
            status,
            starting_one_rms: record.starting_one_rms(),
            current_one_rms: record.current_one_rms(),
            current_week: record.current_week as u32,
            current_session: record.current_session as u32,
            total_sessions_planned: record.total_sessions_planned as u32,
            total_sessions_completed: record.total_sessions_completed as u32,
            is_complete: status == CycleStatus::Completed,
            started_at: record.started_at,
            first_session_date: record.first_session_date,
            completed_at: record.completed_at,
        })
    }

    fn session_response(record: &SessionRecord) -> EngineResult<ScheduledSessionResponse> {
        let time_of_day = record
            .time_of_day
            .as_deref()
            .map(|s| {
                s.parse::<TimeOfDay>()
                    .map_err(|e| EngineError::Internal(anyhow!(e)))
            })
            .transpose()?;
        Ok(ScheduledSessionResponse {
            id: record.id,
            week_number: record.week_number as u32,
            session_number: record.session_number as u32,
            session_name: record.session_name.clone(),
            scheduled_date: record.scheduled_date,
            time_of_day,
            completed: record.completed,
            workout_id: record.workout_id,
        })
    }
}

/// Map a logged exercise name onto a main lift. Order matters:
/// "deadlift" must win before a bare "squat"/"bench" substring check,
/// so "Romanian Deadlift" never counts as something else.
fn match_main_lift(exercise_name: &str) -> Option<LiftType> {
    let name = exercise_name.to_lowercase();
    if name.contains("deadlift") {
        Some(LiftType::Deadlift)
    } else if name.contains("squat") {
        Some(LiftType::Squat)
    } else if name.contains("bench") {
        Some(LiftType::Bench)
    } else if name.contains("overhead") || name.contains("ohp") {
        Some(LiftType::OverheadPress)
    } else {
        None
    }
}

/// Heaviest completed single-lift set per main lift. A zero in the
/// result means the lift was not tested.
fn extract_tested_maxes(sets: &[WorkoutSetRecord]) -> OneRmValues {
    let mut tested = OneRmValues::default();
    for set in sets {
        if !set.completed || set.reps < 1 || set.weight <= 0.0 {
            continue;
        }
        if let Some(lift) = match_main_lift(&set.exercise_name) {
            if set.weight > tested.value_for(lift) {
                tested.set_for(lift, set.weight);
            }
        }
    }
    tested
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn set(name: &str, weight: f64, reps: i32, completed: bool) -> WorkoutSetRecord {
        WorkoutSetRecord {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            exercise_name: name.to_string(),
            set_number: 1,
            weight,
            reps,
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn main_lift_matching_prefers_deadlift_over_substrings() {
        assert_eq!(match_main_lift("Romanian Deadlift"), Some(LiftType::Deadlift));
        assert_eq!(match_main_lift("Back Squat"), Some(LiftType::Squat));
        assert_eq!(match_main_lift("bench press"), Some(LiftType::Bench));
        assert_eq!(match_main_lift("Overhead Press"), Some(LiftType::OverheadPress));
        assert_eq!(match_main_lift("OHP"), Some(LiftType::OverheadPress));
        assert_eq!(match_main_lift("Lat Pulldown"), None);
    }

    #[test]
    fn tested_maxes_take_the_heaviest_completed_set_per_lift() {
        let sets = vec![
            set("Squat", 150.0, 1, true),
            set("Squat", 160.0, 1, true),
            set("Squat", 170.0, 1, false),
            set("Bench Press", 100.0, 1, true),
        ];
        let tested = extract_tested_maxes(&sets);
        assert_eq!(tested.squat, 160.0);
        assert_eq!(tested.bench, 100.0);
        assert_eq!(tested.deadlift, 0.0);
        assert_eq!(tested.overhead_press, 0.0);
    }

    #[test]
    fn zero_weight_and_zero_rep_sets_are_ignored() {
        let sets = vec![
            set("Squat", 0.0, 1, true),
            set("Bench Press", 100.0, 0, true),
        ];
        assert!(!extract_tested_maxes(&sets).any_nonzero());
    }

    #[test]
    fn unrecognized_exercises_contribute_nothing() {
        let sets = vec![set("Leg Press", 200.0, 1, true)];
        assert!(!extract_tested_maxes(&sets).any_nonzero());
    }
}
