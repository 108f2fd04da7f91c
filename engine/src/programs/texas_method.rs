//! Texas Method: weekly volume / recovery / intensity rotation with a
//! small load increase each week.

use liftplan_shared::loading::{round_to_plate, PLATE_INCREMENT};
use liftplan_shared::models::{
    Difficulty, LiftType, OneRmValues, ProgramCategory, ProgramInfo, ProgramWorkout,
};

use super::{acc, main_exercise, ProgramDefinition};
use crate::accessories::resolve_accessories;

const WEEKS: u32 = 9;
const SESSIONS_PER_WEEK: u32 = 3;

/// Fraction of 1RM per weekday slot: volume, recovery, intensity.
const DAY_PCTS: [f64; 3] = [0.675, 0.54, 0.75];

pub struct TexasMethod;

impl TexasMethod {
    fn target(&self, one_rm: f64, week: u32, session: u32) -> f64 {
        if one_rm <= 0.0 {
            return 0.0;
        }
        let pct = DAY_PCTS[(session as usize - 1).min(2)];
        round_to_plate(one_rm * pct + (week - 1) as f64 * PLATE_INCREMENT)
    }
}

impl ProgramDefinition for TexasMethod {
    fn info(&self) -> ProgramInfo {
        ProgramInfo {
            slug: "texas-method".into(),
            name: "Texas Method".into(),
            description: "Intermediate weekly-progression program. Monday volume, \
                          Wednesday recovery, Friday a new five-rep maximum."
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
            // Presses alternate weekly: odd weeks bench on volume and
            // intensity days, even weeks overhead press.
            let (press, press_rm, off_press, off_press_rm) = if week % 2 == 1 {
                (LiftType::Bench, one_rms.bench, LiftType::OverheadPress, one_rms.overhead_press)
            } else {
                (LiftType::OverheadPress, one_rms.overhead_press, LiftType::Bench, one_rms.bench)
            };
            for session in 1..=SESSIONS_PER_WEEK {
                let squat = self.target(one_rms.squat, week, session);
                let (name, exercises, accessories) = match session {
                    1 => (
                        "Volume Day",
                        vec![
                            main_exercise(LiftType::Squat, 5, 5, squat),
                            main_exercise(press, 5, 5, self.target(press_rm, week, session)),
                            main_exercise(LiftType::Row, 5, 5, self.target(one_rms.bench * 0.75, week, session)),
                        ],
                        Vec::new(),
                    ),
                    2 => (
                        "Recovery Day",
                        vec![
                            main_exercise(LiftType::Squat, 2, 5, squat),
                            main_exercise(off_press, 3, 5, self.target(off_press_rm, week, session)),
                        ],
                        self.accessories(week, session),
                    ),
                    _ => (
                        "Intensity Day",
                        vec![
                            main_exercise(LiftType::Squat, 1, 5, squat),
                            main_exercise(press, 1, 5, self.target(press_rm, week, session)),
                            main_exercise(LiftType::Deadlift, 1, 5, self.target(one_rms.deadlift, week, session)),
                        ],
                        Vec::new(),
                    ),
                };
                workouts.push(ProgramWorkout {
                    week_number: week,
                    session_number: session,
                    session_name: name.to_string(),
                    exercises,
                    accessories: resolve_accessories(&accessories, one_rms),
                });
            }
        }
        workouts
    }

    fn target_weight(&self, estimated_one_rm: f64, week: u32, session: u32, _lift: LiftType) -> f64 {
        self.target(estimated_one_rm, week, session)
    }

    fn accessories(&self, _week: u32, session: u32) -> Vec<liftplan_shared::models::ProgramAccessory> {
        if session == 2 {
            vec![acc("chin-up", 3, 8u32), acc("plank", 3, "45 sec")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(140.0, 100.0, 180.0, 60.0)
    }

    #[test]
    fn intensity_day_is_heavier_than_volume_day_which_beats_recovery() {
        let p = TexasMethod;
        let volume = p.target_weight(140.0, 1, 1, LiftType::Squat);
        let recovery = p.target_weight(140.0, 1, 2, LiftType::Squat);
        let intensity = p.target_weight(140.0, 1, 3, LiftType::Squat);
        assert!(intensity > volume && volume > recovery);
    }

    #[test]
    fn weekly_load_increases_by_one_increment() {
        let p = TexasMethod;
        let w1 = p.target_weight(140.0, 1, 3, LiftType::Squat);
        let w2 = p.target_weight(140.0, 2, 3, LiftType::Squat);
        assert_eq!(w2 - w1, PLATE_INCREMENT);
    }

    #[test]
    fn presses_alternate_by_week_parity() {
        let p = TexasMethod;
        let workouts = p.generate_workouts(&one_rms());
        let volume_day = |week: u32| {
            workouts
                .iter()
                .find(|w| w.week_number == week && w.session_number == 1)
                .unwrap()
        };
        assert!(volume_day(1).exercises.iter().any(|e| e.lift == LiftType::Bench));
        assert!(volume_day(2).exercises.iter().any(|e| e.lift == LiftType::OverheadPress));
    }

    #[test]
    fn recovery_day_carries_the_accessory_work() {
        let p = TexasMethod;
        let workouts = p.generate_workouts(&one_rms());
        let recovery = &workouts[1];
        assert_eq!(recovery.session_name, "Recovery Day");
        let ids: Vec<_> = recovery.accessories.iter().map(|a| a.accessory_id.as_str()).collect();
        assert_eq!(ids, vec!["chin-up", "plank"]);
        assert!(workouts[0].accessories.is_empty());
        assert!(workouts[2].accessories.is_empty());
    }

    #[test]
    fn deadlift_appears_only_on_intensity_day() {
        let p = TexasMethod;
        let workouts = p.generate_workouts(&one_rms());
        for w in &workouts {
            let has_deadlift = w.exercises.iter().any(|e| e.lift == LiftType::Deadlift);
            assert_eq!(has_deadlift, w.session_number == 3);
        }
    }
}
