//! Glute Builder: beginner lower-body-focused program with a gentle
//! weekly percentage ramp and heavy accessory emphasis.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramAccessory, ProgramCategory, ProgramInfo,
    ProgramWorkout,
};

use super::{acc, main_exercise, pct_of, ProgramDefinition};
use crate::accessories::resolve_accessories;

const WEEKS: u32 = 10;
const SESSIONS_PER_WEEK: u32 = 3;

const START_PCT: f64 = 0.55;
const WEEKLY_PCT_STEP: f64 = 0.025;

fn week_pct(week: u32) -> f64 {
    START_PCT + (week - 1) as f64 * WEEKLY_PCT_STEP
}

fn day_accessories(session: u32) -> Vec<ProgramAccessory> {
    match session {
        1 => vec![
            acc("hip-thrust", 4, 10u32),
            acc("lunge", 3, 12u32),
            acc("calf-raise", 3, 15u32),
        ],
        2 => vec![
            acc("lat-pulldown", 3, 10u32),
            acc("db-shoulder-press", 3, 10u32),
            acc("push-up", 3, 12u32),
        ],
        _ => vec![
            acc("romanian-deadlift", 3, 10u32),
            acc("glute-bridge", 4, 12u32),
            acc("plank", 3, "45 sec"),
        ],
    }
}

pub struct GluteBuilder;

impl ProgramDefinition for GluteBuilder {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "glute-builder".into(),
            name: "Glute Builder".into(),
            description: "Ten-week beginner program built around two lower-body \
                          days of hip-dominant work plus one upper-body day, \
                          ramping load a small step each week."
                .into(),
            difficulty: Difficulty::Beginner,
            days_per_week: SESSIONS_PER_WEEK as u8,
            estimated_weeks: WEEKS as u8,
            total_sessions: WEEKS * SESSIONS_PER_WEEK,
            main_lifts: vec![LiftType::Squat, LiftType::Bench, LiftType::Deadlift],
            category: ProgramCategory::Womens,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            let pct = week_pct(week);
            for session in 1..=SESSIONS_PER_WEEK {
                let (name, lift, sets, reps) = match session {
                    1 => ("Lower A", LiftType::Squat, 4, 8),
                    2 => ("Upper", LiftType::Bench, 4, 8),
                    _ => ("Lower B", LiftType::Deadlift, 4, 6),
                };
                let weight = pct_of(one_rms.value_for(lift), pct, lift);
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name.to_string(),
                    exercises: vec![main_exercise(lift, sets, reps, weight)],
                    accessories: resolve_accessories(&day_accessories(session), one_rms),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, _session: u32, lift: LiftType) -> f64 {
        pct_of(estimated_one_rm, week_pct(week.min(WEEKS)), lift)
    }

    fn accessories(&self, _week: u32, session: u32) -> Vec<ProgramAccessory> {
        day_accessories(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(80.0, 40.0, 100.0, 25.0)
    }

    #[test]
    fn load_ramps_a_fixed_step_each_week() {
        assert_eq!(week_pct(1), 0.55);
        assert_eq!(week_pct(10), 0.55 + 9.0 * 0.025);
        let p = GluteBuilder;
        let w1 = p.target_weight(80.0, 1, 1, LiftType::Squat);
        let w10 = p.target_weight(80.0, 10, 1, LiftType::Squat);
        assert!(w10 > w1);
    }

    #[test]
    fn week_structure_is_lower_upper_lower() {
        let p = GluteBuilder;
        let workouts = p.generate_workouts(&one_rms());
        assert_eq!(workouts[0].session_name, "Lower A");
        assert_eq!(workouts[0].exercises[0].lift, LiftType::Squat);
        assert_eq!(workouts[1].session_name, "Upper");
        assert_eq!(workouts[1].exercises[0].lift, LiftType::Bench);
        assert_eq!(workouts[2].session_name, "Lower B");
        assert_eq!(workouts[2].exercises[0].lift, LiftType::Deadlift);
    }

    #[test]
    fn every_session_carries_three_accessories() {
        let p = GluteBuilder;
        for w in p.generate_workouts(&one_rms()) {
            assert_eq!(w.accessories.len(), 3, "{}", w.session_name);
        }
    }

    #[test]
    fn hip_thrust_keys_off_the_squat_max() {
        let p = GluteBuilder;
        let workouts = p.generate_workouts(&one_rms());
        let thrust = workouts[0]
            .accessories
            .iter()
            .find(|a| a.accessory_id == "hip-thrust")
            .unwrap();
        // 80 * 0.85 = 68, rounded to the plate increment.
        assert_eq!(thrust.target_weight, 67.5);
    }
}
