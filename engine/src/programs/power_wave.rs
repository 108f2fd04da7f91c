//! Power Wave: four-day tier-based program running 4-week waves, with
//! the fourth week of each wave as a deload.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{main_exercise, pct_of_tm, ProgramDefinition};

const WEEKS: u32 = 8;
const SESSIONS_PER_WEEK: u32 = 4;
const WAVE_LEN: u32 = 4;

/// (sets, reps, pct of training max) per week-in-wave for the primary
/// slot.
const TIER1_WAVE: [(u32, u32, f64); 4] = [
    (5, 5, 0.75),
    (5, 3, 0.80),
    (5, 2, 0.85),
    (3, 5, 0.60),
];

/// Secondary slot: same lift family, lighter and higher-rep.
const TIER2_WAVE: [(u32, u32, f64); 4] = [
    (3, 8, 0.60),
    (3, 6, 0.65),
    (3, 5, 0.70),
    (2, 8, 0.50),
];

/// (tier-1 lift, tier-2 lift) per session slot within a week.
const DAY_LIFTS: [(LiftType, LiftType); 4] = [
    (LiftType::Squat, LiftType::Bench),
    (LiftType::Bench, LiftType::Squat),
    (LiftType::Deadlift, LiftType::OverheadPress),
    (LiftType::OverheadPress, LiftType::Deadlift),
];

fn week_in_wave(week: u32) -> u32 {
    (week - 1) % WAVE_LEN + 1
}

pub struct PowerWave;

impl ProgramDefinition for PowerWave {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "power-wave".into(),
            name: "Power Wave".into(),
            description: "Four-day powerlifting program built on repeating \
                          four-week intensity waves, each capped by a deload \
                          week."
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
            category: ProgramCategory::Powerlifting,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            let wave = week_in_wave(week) as usize - 1;
            let (t1_sets, t1_reps, t1_pct) = TIER1_WAVE[wave];
            let (t2_sets, t2_reps, t2_pct) = TIER2_WAVE[wave];
            let deload = week_in_wave(week) == WAVE_LEN;
            for session in 1..=SESSIONS_PER_WEEK {
                let (t1_lift, t2_lift) = DAY_LIFTS[session as usize - 1];
                let mut name = format!("{} Day", t1_lift.display_name());
                if deload {
                    name.push_str(" (Deload)");
                }
                let t1_weight = pct_of_tm(one_rms.value_for(t1_lift), t1_pct, t1_lift);
                let t2_weight = pct_of_tm(one_rms.value_for(t2_lift), t2_pct, t2_lift);
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name,
                    exercises: vec![
                        main_exercise(t1_lift, t1_sets, t1_reps, t1_weight),
                        main_exercise(t2_lift, t2_sets, t2_reps, t2_weight),
                    ],
                    accessories: Vec::new(),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, session: u32, lift: LiftType) -> f64 {
        let wave = week_in_wave(week) as usize - 1;
        let (t1_lift, _) = DAY_LIFTS[(session as usize - 1).min(3)];
        let pct = if lift == t1_lift {
            TIER1_WAVE[wave].2
        } else {
            TIER2_WAVE[wave].2
        };
        pct_of_tm(estimated_one_rm, pct, lift)
    }
}
