//! StrongLifts 5x5: alternating A/B full-body sessions with linear
//! per-session load increases.

use liftplan_shared::loading::{round_to_plate, PLATE_INCREMENT};
use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{main_exercise, ProgramDefinition};

const WEEKS: u32 = 12;
const SESSIONS_PER_WEEK: u32 = 3;

/// Conservative starting fraction of each lift's 1RM. Deadlift starts
/// heavier because it is trained for a single work set; the row key is
/// a fraction of the bench 1RM.
fn base_pct(lift: LiftType) -> f64 {
    match lift {
        LiftType::Squat | LiftType::Bench | LiftType::OverheadPress => 0.50,
        LiftType::Deadlift => 0.60,
        LiftType::Row => 0.45,
    }
}

pub struct StrongLifts5x5;

impl StrongLifts5x5 {
    fn target(&self, one_rm: f64, overall_session: u32, lift: LiftType) -> f64 {
        if one_rm <= 0.0 {
            return 0.0;
        }
        let start = one_rm * base_pct(lift);
        round_to_plate(start + overall_session as f64 * PLATE_INCREMENT)
    }
}

impl ProgramDefinition for StrongLifts5x5 {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "stronglifts-5x5".into(),
            name: "StrongLifts 5x5".into(),
            description: "Linear-progression full-body program. Two alternating \
                          workouts of three barbell lifts each, adding weight \
                          every session."
                .into(),
            difficulty: Difficulty::Beginner,
            days_per_week: SESSIONS_PER_WEEK as u8,
            estimated_weeks: WEEKS as u8,
            total_sessions: WEEKS * SESSIONS_PER_WEEK,
            main_lifts: vec![
                LiftType::Squat,
                LiftType::Bench,
                LiftType::Deadlift,
                LiftType::OverheadPress,
            ],
            category: ProgramCategory::GeneralStrength,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            for session in 1..=SESSIONS_PER_WEEK {
                let overall = (week - 1) * SESSIONS_PER_WEEK + session;
                // Sessions alternate A, B, A, B, ... across the whole cycle.
                let is_day_a = overall % 2 == 1;
                let squat = self.target(one_rms.squat, overall, LiftType::Squat);
                let (name, exercises) = if is_day_a {
                    (
                        "Day A",
                        vec![
                            main_exercise(LiftType::Squat, 5, 5, squat),
                            main_exercise(
                                LiftType::Bench,
                                5,
                                5,
                                self.target(one_rms.bench, overall, LiftType::Bench),
                            ),
                            main_exercise(
                                LiftType::Row,
                                5,
                                5,
                                self.target(one_rms.bench, overall, LiftType::Row),
                            ),
                        ],
                    )
                } else {
                    (
                        "Day B",
                        vec![
                            main_exercise(LiftType::Squat, 5, 5, squat),
                            main_exercise(
                                LiftType::OverheadPress,
                                5,
                                5,
                                self.target(one_rms.overhead_press, overall, LiftType::OverheadPress),
                            ),
                            main_exercise(
                                LiftType::Deadlift,
                                1,
                                5,
                                self.target(one_rms.deadlift, overall, LiftType::Deadlift),
                            ),
                        ],
                    )
                };
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name.to_string(),
                    exercises,
                    accessories: Vec::new(),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, session: u32, lift: LiftType) -> f64 {
        let overall = (week - 1) * SESSIONS_PER_WEEK + session;
        self.target(estimated_one_rm, overall, lift)
    }
}
