//! Candito-style six-week cycle: a three-week strength block, a
//! two-week peaking block, and a final deload week.

use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{amrap_set, main_exercise, pct_of, ProgramDefinition};

const WEEKS: u32 = 6;
const SESSIONS_PER_WEEK: u32 = 3;

struct WeekScheme {
    sets: u32,
    reps: u32,
    pct: f64,
    /// Zero disables the AMRAP top set (deload).
    amrap_pct: f64,
    amrap_floor: u32,
}

const WEEK_SCHEMES: [WeekScheme; 6] = [
    WeekScheme { sets: 3, reps: 6, pct: 0.80, amrap_pct: 0.80, amrap_floor: 6 },
    WeekScheme { sets: 3, reps: 5, pct: 0.85, amrap_pct: 0.85, amrap_floor: 5 },
    WeekScheme { sets: 3, reps: 4, pct: 0.875, amrap_pct: 0.875, amrap_floor: 4 },
    WeekScheme { sets: 3, reps: 3, pct: 0.90, amrap_pct: 0.90, amrap_floor: 3 },
    WeekScheme { sets: 3, reps: 2, pct: 0.925, amrap_pct: 0.95, amrap_floor: 1 },
    WeekScheme { sets: 2, reps: 5, pct: 0.60, amrap_pct: 0.0, amrap_floor: 0 },
];

/// Lift pairing per session slot within a week.
const DAY_LIFTS: [(LiftType, LiftType); 3] = [
    (LiftType::Squat, LiftType::Bench),
    (LiftType::Deadlift, LiftType::OverheadPress),
    (LiftType::Bench, LiftType::Squat),
];

pub struct CanditoSixWeek;

impl ProgramDefinition for CanditoSixWeek {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "candito-six-week".into(),
            name: "Candito Six Week".into(),
            description: "Block-periodized six-week cycle. Three weeks of \
                          strength work, two weeks of peaking singles and \
                          doubles, then a deload."
                .into(),
            difficulty: Difficulty::Advanced,
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
            let scheme = &WEEK_SCHEMES[week as usize - 1];
            let block = if week <= 3 { "Strength Block" } else { "Peaking Block" };
            for session in 1..=SESSIONS_PER_WEEK {
                let (first, second) = DAY_LIFTS[session as usize - 1];
                let mut exercises = Vec::with_capacity(4);
                for lift in [first, second] {
                    let one_rm = one_rms.value_for(lift);
                    exercises.push(main_exercise(
                        lift,
                        scheme.sets,
                        scheme.reps,
                        pct_of(one_rm, scheme.pct, lift),
                    ));
                    if scheme.amrap_pct > 0.0 {
                        exercises.push(amrap_set(
                            lift,
                            scheme.amrap_floor,
                            pct_of(one_rm, scheme.amrap_pct, lift),
                        ));
                    }
                }
                let name = if week == WEEKS {
                    format!("{} (Deload)", block)
                } else {
                    block.to_string()
                };
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
        let scheme = &WEEK_SCHEMES[(week as usize - 1).min(WEEKS as usize - 1)];
        pct_of(estimated_one_rm, scheme.pct, lift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(140.0, 100.0, 180.0, 60.0)
    }

    #[test]
    fn intensity_ramps_across_the_cycle_then_deloads() {
        let p = CanditoSixWeek;
        let w = |week| p.target_weight(140.0, week, 1, LiftType::Squat);
        for week in 1..5 {
            assert!(w(week + 1) >= w(week));
        }
        assert!(w(6) < w(1));
    }

    #[test]
    fn amrap_sets_accompany_every_non_deload_session() {
        let p = CanditoSixWeek;
        for w in p.generate_workouts(&one_rms()) {
            let amraps = w.exercises.iter().filter(|e| e.is_amrap).count();
            if w.week_number == 6 {
                assert_eq!(amraps, 0);
            } else {
                assert_eq!(amraps, 2);
            }
        }
    }

    #[test]
    fn blocks_are_named_and_week_six_is_the_deload() {
        let p = CanditoSixWeek;
        let workouts = p.generate_workouts(&one_rms());
        assert_eq!(workouts[0].session_name, "Strength Block");
        let week4 = workouts.iter().find(|w| w.week_number == 4).unwrap();
        assert_eq!(week4.session_name, "Peaking Block");
        let week6 = workouts.iter().find(|w| w.week_number == 6).unwrap();
        assert_eq!(week6.session_name, "Peaking Block (Deload)");
    }

    #[test]
    fn peak_week_amrap_is_heavier_than_its_working_sets() {
        let p = CanditoSixWeek;
        let workouts = p.generate_workouts(&one_rms());
        let week5 = workouts.iter().find(|w| w.week_number == 5).unwrap();
        let working = &week5.exercises[0];
        let amrap = &week5.exercises[1];
        assert!(amrap.is_amrap);
        assert!(amrap.target_weight > working.target_weight);
        assert_eq!(amrap.reps, 1);
    }
}
