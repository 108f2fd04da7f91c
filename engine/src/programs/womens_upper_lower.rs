//! Women's Upper/Lower: four-day intermediate split running four-week
//! waves, with dedicated accessory blocks per day.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramAccessory, ProgramCategory, ProgramInfo,
    ProgramWorkout,
};

use super::{acc, main_exercise, pct_of_tm, ProgramDefinition};
use crate::accessories::resolve_accessories;

const WEEKS: u32 = 8;
const SESSIONS_PER_WEEK: u32 = 4;
const WAVE_LEN: u32 = 4;

/// (sets, reps, pct of training max) per week-in-wave; the fourth week
/// deloads.
const WAVE: [(u32, u32, f64); 4] = [
    (4, 8, 0.70),
    (4, 6, 0.75),
    (4, 4, 0.80),
    (3, 8, 0.625),
];

fn week_in_wave(week: u32) -> u32 {
    (week - 1) % WAVE_LEN + 1
}

fn day_accessories(session: u32) -> Vec<ProgramAccessory> {
    match session {
        1 => vec![acc("hip-thrust", 4, 10u32), acc("romanian-deadlift", 3, 10u32)],
        2 => vec![acc("barbell-row", 4, 8u32), acc("db-curl", 3, 12u32)],
        3 => vec![acc("glute-bridge", 4, 12u32), acc("lunge", 3, 10u32)],
        _ => vec![acc("lat-pulldown", 3, 10u32), acc("face-pull", 3, 15u32)],
    }
}

pub struct WomensUpperLower;

impl ProgramDefinition for WomensUpperLower {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "womens-upper-lower".into(),
            name: "Women's Upper/Lower".into(),
            description: "Eight-week intermediate upper/lower split. Four-week \
                          waves of rising intensity with glute-focused \
                          accessory work, deloading every fourth week."
                .into(),
            difficulty: Difficulty::Intermediate,
            days_per_week: SESSIONS_PER_WEEK as u8,
            estimated_weeks: WEEKS as u8,
            total_sessions: WEEKS * SESSIONS_PER_WEEK,
            main_lifts: vec![
                LiftType::Squat,
                LiftType::Bench,
                LiftType::Deadlift,
                LiftType::OverheadPress,
            ],
            category: ProgramCategory::Womens,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            let wave = week_in_wave(week);
            let (sets, reps, pct) = WAVE[wave as usize - 1];
            let deload = wave == WAVE_LEN;
            for session in 1..=SESSIONS_PER_WEEK {
                let (base_name, lift) = match session {
                    1 => ("Lower A", LiftType::Squat),
                    2 => ("Upper A", LiftType::Bench),
                    3 => ("Lower B", LiftType::Deadlift),
                    _ => ("Upper B", LiftType::OverheadPress),
                };
                let mut name = base_name.to_string();
                if deload {
                    name.push_str(" (Deload)");
                }
                let weight = pct_of_tm(one_rms.value_for(lift), pct, lift);
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name,
                    exercises: vec![main_exercise(lift, sets, reps, weight)],
                    accessories: resolve_accessories(&day_accessories(session), one_rms),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, _session: u32, lift: LiftType) -> f64 {
        let (_, _, pct) = WAVE[week_in_wave(week) as usize - 1];
        pct_of_tm(estimated_one_rm, pct, lift)
    }

    fn accessories(&self, _week: u32, session: u32) -> Vec<ProgramAccessory> {
        day_accessories(session)
    }
}
