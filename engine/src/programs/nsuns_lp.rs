//! nSuns-style linear progression: four days of high-volume pyramid
//! work, two lifts per day, with the percentage scheme rotating across
//! sessions.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, PrescribedExercise, ProgramCategory, ProgramInfo,
    ProgramWorkout,
};

use super::{amrap_set, pct_of_tm, ProgramDefinition};

const WEEKS: u32 = 6;
const SESSIONS_PER_WEEK: u32 = 4;
const ROTATION: usize = 5;

const TIER1_PCTS: [f64; ROTATION] = [0.75, 0.80, 0.85, 0.90, 0.95];
const TIER1_REPS: [u32; ROTATION] = [5, 3, 1, 3, 5];
const TIER2_PCTS: [f64; ROTATION] = [0.50, 0.55, 0.60, 0.65, 0.70];
const TIER2_REPS: [u32; ROTATION] = [8, 8, 6, 6, 4];

/// (tier-1 lift, tier-2 lift) per session slot within a week.
const DAY_LIFTS: [(LiftType, LiftType); 4] = [
    (LiftType::Bench, LiftType::OverheadPress),
    (LiftType::Squat, LiftType::Deadlift),
    (LiftType::OverheadPress, LiftType::Bench),
    (LiftType::Deadlift, LiftType::Squat),
];

fn rotation_slot(week: u32, session: u32) -> usize {
    ((session - 1 + (week - 1) * 2) % ROTATION as u32) as usize
}

pub struct NsunsLp;

impl NsunsLp {
    fn tier1(&self, lift: LiftType, one_rm: f64, slot: usize) -> Vec<PrescribedExercise> {
        let weight = pct_of_tm(one_rm, TIER1_PCTS[slot], lift);
        let mut prescriptions = vec![PrescribedExercise {
            name: lift.display_name().to_string(),
            lift,
            sets: 5,
            reps: TIER1_REPS[slot],
            target_weight: weight,
            is_amrap: false,
        }];
        // Bonus top set at the same load; chase reps above the floor.
        prescriptions.push(amrap_set(lift, 1, weight));
        prescriptions
    }

    fn tier2(&self, lift: LiftType, one_rm: f64, slot: usize) -> PrescribedExercise {
        PrescribedExercise {
            name: format!("{} (Volume)", lift.display_name()),
            lift,
            sets: 6,
            reps: TIER2_REPS[slot],
            target_weight: pct_of_tm(one_rm, TIER2_PCTS[slot], lift),
            is_amrap: false,
        }
    }
}

impl ProgramDefinition for NsunsLp {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "nsuns-lp".into(),
            name: "nSuns LP".into(),
            description: "High-volume four-day linear progression. Each session \
                          pairs a heavy primary pyramid with a lighter volume \
                          lift, rotating intensities across the week."
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
            category: ProgramCategory::GeneralStrength,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            for session in 1..=SESSIONS_PER_WEEK {
                let slot = rotation_slot(week, session);
                let (t1_lift, t2_lift) = DAY_LIFTS[session as usize - 1];
                let mut exercises = self.tier1(t1_lift, one_rms.value_for(t1_lift), slot);
                exercises.push(self.tier2(t2_lift, one_rms.value_for(t2_lift), slot));
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: format!("{} Day", t1_lift.display_name()),
                    exercises,
                    accessories: Vec::new(),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, session: u32, lift: LiftType) -> f64 {
        let slot = rotation_slot(week, session.min(SESSIONS_PER_WEEK));
        let (t1_lift, _) = DAY_LIFTS[(session as usize - 1).min(3)];
        let pct = if lift == t1_lift {
            TIER1_PCTS[slot]
        } else {
            TIER2_PCTS[slot]
        };
        pct_of_tm(estimated_one_rm, pct, lift)
    }
}
