//! Russian-style squat and bench cycle: alternating volume and
//! intensity weeks with a rising weekly modifier and a final deload.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{main_exercise, pct_of, ProgramDefinition};

const WEEKS: u32 = 6;
const SESSIONS_PER_WEEK: u32 = 3;

const VOLUME_PCT: f64 = 0.70;
const INTENSITY_PCT: f64 = 0.85;

/// Multiplier applied on top of the base percentage each week. The
/// final week backs off for the deload.
const WEEK_MODIFIERS: [f64; 6] = [1.0, 1.0, 1.025, 1.025, 1.05, 0.85];

pub struct RussianPower;

impl RussianPower {
    fn scheme(&self, week: u32) -> (u32, u32, f64) {
        let modifier = WEEK_MODIFIERS[(week as usize - 1).min(WEEKS as usize - 1)];
        let (mut sets, mut reps, base): (u32, u32, f64) = if week % 2 == 1 {
            (6, 4, VOLUME_PCT)
        } else {
            (4, 2, INTENSITY_PCT)
        };
        if week == WEEKS {
            sets = sets.saturating_sub(2).max(1);
            reps = reps.min(3);
        }
        (sets, reps, base * modifier)
    }
}

impl ProgramDefinition for RussianPower {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "russian-power".into(),
            name: "Russian Power".into(),
            description: "Six-week squat and bench specialization. Volume and \
                          intensity weeks alternate while the loading modifier \
                          creeps upward, ending in a deload."
                .into(),
            difficulty: Difficulty::Advanced,
            days_per_week: SESSIONS_PER_WEEK as u8,
            estimated_weeks: WEEKS as u8,
            total_sessions: WEEKS * SESSIONS_PER_WEEK,
            main_lifts: vec![LiftType::Squat, LiftType::Bench, LiftType::Deadlift],
            category: ProgramCategory::Powerlifting,
        }
    }

    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout> {
        let mut workouts = Vec::with_capacity((WEEKS * SESSIONS_PER_WEEK) as usize);
        for week in 1..=WEEKS {
            let (sets, reps, pct) = self.scheme(week);
            let deload = week == WEEKS;
            let base_name = if week % 2 == 1 { "Volume" } else { "Intensity" };
            for session in 1..=SESSIONS_PER_WEEK {
                let mut name = format!("{} Day {}", base_name, session);
                if deload {
                    name.push_str(" (Deload)");
                }
                let mut exercises = vec![
                    main_exercise(
                        LiftType::Squat,
                        sets,
                        reps,
                        pct_of(one_rms.squat, pct, LiftType::Squat),
                    ),
                    main_exercise(
                        LiftType::Bench,
                        sets,
                        reps,
                        pct_of(one_rms.bench, pct, LiftType::Bench),
                    ),
                ];
                // Deadlift once a week to maintain the pull.
                if session == SESSIONS_PER_WEEK {
                    exercises.push(main_exercise(
                        LiftType::Deadlift,
                        3,
                        3,
                        pct_of(one_rms.deadlift, pct, LiftType::Deadlift),
                    ));
                }
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name,
                    exercises,
                    accessories: Vec::new(),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, _session: u32, lift: LiftType) -> f64 {
        let (_, _, pct) = self.scheme(week);
        pct_of(estimated_one_rm, pct, lift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(140.0, 100.0, 180.0, 60.0)
    }

    #[test]
    fn volume_and_intensity_weeks_alternate() {
        let p = RussianPower;
        let workouts = p.generate_workouts(&one_rms());
        let first_of = |week: u32| {
            workouts
                .iter()
                .find(|w| w.week_number == week && w.session_number == 1)
                .unwrap()
        };
        assert!(first_of(1).session_name.starts_with("Volume"));
        assert!(first_of(2).session_name.starts_with("Intensity"));
        assert_eq!(first_of(1).exercises[0].sets, 6);
        assert_eq!(first_of(1).exercises[0].reps, 4);
        assert_eq!(first_of(2).exercises[0].sets, 4);
        assert_eq!(first_of(2).exercises[0].reps, 2);
    }

    #[test]
    fn modifier_raises_load_in_later_weeks() {
        let p = RussianPower;
        let w1 = p.target_weight(140.0, 1, 1, LiftType::Squat);
        let w3 = p.target_weight(140.0, 3, 1, LiftType::Squat);
        let w5 = p.target_weight(140.0, 5, 1, LiftType::Squat);
        assert!(w3 > w1);
        assert!(w5 > w3);
    }

    #[test]
    fn final_week_deloads_sets_and_marks_names() {
        let p = RussianPower;
        let workouts = p.generate_workouts(&one_rms());
        for w in workouts.iter().filter(|w| w.week_number == 6) {
            assert!(w.session_name.ends_with("(Deload)"));
            assert_eq!(w.exercises[0].sets, 2);
            assert!(w.exercises[0].reps <= 3);
            assert!(w.exercises[0].target_weight < p.target_weight(140.0, 5, 1, LiftType::Squat));
        }
    }

    #[test]
    fn deload_scheme_trims_sets_and_caps_reps() {
        let (sets, reps, pct) = RussianPower.scheme(WEEKS);
        assert_eq!(sets, 2);
        assert_eq!(reps, 2);
        assert!(pct < INTENSITY_PCT);
    }

    #[test]
    fn deadlift_only_on_the_last_session_of_each_week() {
        let p = RussianPower;
        for w in p.generate_workouts(&one_rms()) {
            let has_deadlift = w.exercises.iter().any(|e| e.lift == LiftType::Deadlift);
            assert_eq!(has_deadlift, w.session_number == SESSIONS_PER_WEEK);
        }
    }
}
