//! Program catalog service

use tracing::debug;

use liftplan_shared::models::{LiftType, OneRmValues, ProgramInfo, ProgramWorkout};

use crate::error::{EngineError, EngineResult};
use crate::programs::{self, ProgramDefinition};

/// Program catalog service for business logic
pub struct ProgramService;

impl ProgramService {
    /// List every available program, ordered by slug
    pub fn list_programs() -> Vec<ProgramInfo> {
        programs::all_programs().iter().map(|p| p.info()).collect()
    }

    /// Look up a program by slug
    pub fn get_program(slug: &str) -> EngineResult<&'static dyn ProgramDefinition> {
        programs::find_program(slug)
            .ok_or_else(|| EngineError::NotFound(format!("program `{slug}` does not exist")))
    }

    /// Program metadata by slug
    pub fn get_program_info(slug: &str) -> EngineResult<ProgramInfo> {
        Ok(Self::get_program(slug)?.info())
    }

    /// Generate a full cycle's workouts without persisting anything
    pub fn generate_preview(
        slug: &str,
        one_rms: &OneRmValues,
    ) -> EngineResult<Vec<ProgramWorkout>> {
        let program = Self::get_program(slug)?;
        let workouts = program.generate_workouts(one_rms);
        debug!(slug, sessions = workouts.len(), "generated program preview");
        Ok(workouts)
    }

    /// Replay a single prescribed load, e.g. for what-if displays
    /// against a hypothetical 1RM
    pub fn target_weight(
        slug: &str,
        estimated_one_rm: f64,
        week: u32,
        session: u32,
        lift: LiftType,
    ) -> EngineResult<f64> {
        Ok(Self::get_program(slug)?.target_weight(estimated_one_rm, week, session, lift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_names_every_program_once() {
        let infos = ProgramService::list_programs();
        assert_eq!(infos.len(), 9);
        let mut slugs: Vec<_> = infos.iter().map(|i| i.slug.clone()).collect();
        slugs.dedup();
        assert_eq!(slugs.len(), 9);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let err = ProgramService::get_program_info("does-not-exist").unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn preview_matches_declared_session_count() {
        let one_rms = OneRmValues::new(100.0, 80.0, 120.0, 50.0);
        let info = ProgramService::get_program_info("texas-method").unwrap();
        let workouts = ProgramService::generate_preview("texas-method", &one_rms).unwrap();
        assert_eq!(workouts.len() as u32, info.total_sessions);
    }

    #[test]
    fn single_target_replay_matches_generation() {
        let one_rms = OneRmValues::new(100.0, 0.0, 0.0, 0.0);
        let workouts = ProgramService::generate_preview("stronglifts-5x5", &one_rms).unwrap();
        let squat = workouts[0]
            .exercises
            .iter()
            .find(|e| e.lift == LiftType::Squat)
            .unwrap();
        let replayed =
            ProgramService::target_weight("stronglifts-5x5", 100.0, 1, 1, LiftType::Squat)
                .unwrap();
        assert_eq!(replayed, squat.target_weight);
        assert_eq!(replayed, 52.5);
    }
}
