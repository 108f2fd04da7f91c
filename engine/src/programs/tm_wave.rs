//! TM Wave: training-max-based waves over twelve weeks, one main lift
//! per day, closed out by a 1RM test session. Completing that test
//! re-baselines the cycle's working maxes.

use liftplan_shared::loading::round_to_plate;
use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{acc, amrap_set, main_exercise, ProgramDefinition};
use crate::accessories::resolve_accessories;

const TRAINING_WEEKS: u32 = 12;
const SESSIONS_PER_WEEK: u32 = 4;
const WAVE_LEN: u32 = 4;

/// This program works off a more conservative training max than the
/// engine-wide default.
const TM_RATIO: f64 = 0.85;

/// (sets, reps, pct of training max) per week-in-wave.
const WAVE: [(u32, u32, f64); 4] = [
    (3, 8, 0.65),
    (3, 5, 0.75),
    (3, 3, 0.85),
    (2, 5, 0.50),
];

/// One main lift per session slot.
const DAY_LIFTS: [LiftType; 4] = [
    LiftType::Squat,
    LiftType::Bench,
    LiftType::Deadlift,
    LiftType::OverheadPress,
];

fn week_in_wave(week: u32) -> u32 {
    (week - 1) % WAVE_LEN + 1
}

fn training_max(one_rm: f64) -> f64 {
    round_to_plate(one_rm * TM_RATIO)
}

fn day_accessories(session: u32) -> Vec<liftplan_shared::models::ProgramAccessory> {
    match session {
        1 => vec![acc("lunge", 3, 10u32), acc("hanging-leg-raise", 3, 12u32)],
        2 => vec![acc("dips", 3, 10u32), acc("barbell-row", 4, 8u32)],
        3 => vec![acc("pull-up", 4, 6u32), acc("ab-wheel", 3, 10u32)],
        _ => vec![acc("face-pull", 3, 15u32), acc("close-grip-bench", 3, 8u32)],
    }
}

pub struct TmWave;

impl ProgramDefinition for TmWave {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "tm-wave".into(),
            name: "TM Wave".into(),
            description: "Twelve weeks of four-week training-max waves, one \
                          main lift per day with assistance work, finishing \
                          with a max test that re-baselines the cycle."
                .into(),
            difficulty: Difficulty::Intermediate,
            days_per_week: SESSIONS_PER_WEEK as u8,
            estimated_weeks: (TRAINING_WEEKS + 1) as u8,
            total_sessions: TRAINING_WEEKS * SESSIONS_PER_WEEK + 1,
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
        let mut workouts =
            Vec::with_capacity((TRAINING_WEEKS * SESSIONS_PER_WEEK + 1) as usize);
        for week in 1..=TRAINING_WEEKS {
            let wave = week_in_wave(week);
            let (sets, reps, pct) = WAVE[wave as usize - 1];
            let deload = wave == WAVE_LEN;
            for session in 1..=SESSIONS_PER_WEEK {
                let lift = DAY_LIFTS[session as usize - 1];
                let one_rm = one_rms.value_for(lift);
                let weight = if one_rm > 0.0 {
                    round_to_plate(training_max(one_rm) * pct)
                } else {
                    0.0
                };
                let mut exercises = vec![main_exercise(lift, sets, reps, weight)];
                // Heaviest week of the wave tops out with an AMRAP set.
                if wave == 3 {
                    exercises.push(amrap_set(lift, reps, weight));
                }
                let mut name = format!("{} Day", lift.display_name());
                if deload {
                    name.push_str(" (Deload)");
                }
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name,
                    exercises,
                    accessories: if deload {
                        Vec::new()
                    } else {
                        resolve_accessories(&day_accessories(session), one_rms)
                    },
                });
            }
        }
        // Final session: work up to a new single on every main lift.
        let test_exercises = DAY_LIFTS
            .iter()
            .map(|&lift| {
                let one_rm = one_rms.value_for(lift);
                main_exercise(lift, 1, 1, round_to_plate(one_rm))
            })
            .collect();
        workouts.push(ProgramWorkout {
            week_number: TRAINING_WEEKS + 1,
            session_number: 1,
            session_name: "1RM Test".to_string(),
            exercises: test_exercises,
            accessories: Vec::new(),
        });
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, _session: u32, _lift: LiftType) -> f64 {
        if estimated_one_rm <= 0.0 {
            return 0.0;
        }
        if week > TRAINING_WEEKS {
            return round_to_plate(estimated_one_rm);
        }
        let (_, _, pct) = WAVE[week_in_wave(week) as usize - 1];
        round_to_plate(training_max(estimated_one_rm) * pct)
    }

    fn accessories(&self, week: u32, session: u32) -> Vec<liftplan_shared::models::ProgramAccessory> {
        if week > TRAINING_WEEKS || week_in_wave(week) == WAVE_LEN {
            Vec::new()
        } else {
            day_accessories(session)
        }
    }
}
