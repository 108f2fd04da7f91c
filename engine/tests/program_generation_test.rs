//! Behavior tests for program generation and scheduling that need no
//! database.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use liftplan_engine::programs;
use liftplan_engine::scheduler::{generate_schedule, SchedulePreferences};
use liftplan_shared::loading::is_plate_multiple;
use liftplan_shared::models::OneRmValues;

proptest! {
    #[test]
    fn generation_is_deterministic(
        slug_ix in 0usize..9,
        squat in 0.0f64..300.0,
        bench in 0.0f64..200.0,
        deadlift in 0.0f64..350.0,
        ohp in 0.0f64..120.0,
    ) {
        let program = programs::all_programs()[slug_ix];
        let one_rms = OneRmValues::new(squat, bench, deadlift, ohp);
        let a = program.generate_workouts(&one_rms);
        let b = program.generate_workouts(&one_rms);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(&x.session_name, &y.session_name);
            prop_assert_eq!(x.exercises.len(), y.exercises.len());
            for (ex, ey) in x.exercises.iter().zip(&y.exercises) {
                prop_assert_eq!(ex.target_weight, ey.target_weight);
            }
        }
    }

    #[test]
    fn every_target_is_loadable_with_standard_plates(
        slug_ix in 0usize..9,
        squat in 0.0f64..300.0,
        bench in 0.0f64..200.0,
    ) {
        let program = programs::all_programs()[slug_ix];
        let slug = program.info().slug;
        let one_rms = OneRmValues::new(squat, bench, 180.0, 55.0);
        for workout in program.generate_workouts(&one_rms) {
            for exercise in &workout.exercises {
                prop_assert!(
                    is_plate_multiple(exercise.target_weight),
                    "{} {} -> {}", slug, exercise.name, exercise.target_weight
                );
            }
            for accessory in &workout.accessories {
                prop_assert!(is_plate_multiple(accessory.target_weight));
            }
        }
    }

    #[test]
    fn a_full_cycle_always_fits_on_the_calendar(
        slug_ix in 0usize..9,
        start_offset in 0i64..366,
    ) {
        let program = programs::all_programs()[slug_ix];
        let one_rms = OneRmValues::new(140.0, 100.0, 180.0, 60.0);
        let workouts = program.generate_workouts(&one_rms);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(start_offset);
        let preferences = SchedulePreferences {
            preferred_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Sat],
            preferred_time_of_day: None,
            force_first_session_date: None,
        };
        let schedule = generate_schedule(&workouts, start, &preferences).unwrap();
        prop_assert_eq!(schedule.len(), workouts.len());
        let mut prev: Option<NaiveDate> = None;
        for s in &schedule {
            prop_assert!(preferences.preferred_days.contains(&s.scheduled_date.weekday()));
            if let Some(p) = prev {
                prop_assert!(s.scheduled_date > p);
            }
            prev = Some(s.scheduled_date);
        }
    }
}

#[test]
fn session_counts_and_week_spans_match_the_descriptors() {
    let one_rms = OneRmValues::new(140.0, 100.0, 180.0, 60.0);
    for program in programs::all_programs() {
        let info = program.info();
        let workouts = program.generate_workouts(&one_rms);
        assert_eq!(workouts.len() as u32, info.total_sessions, "{}", info.slug);
        let max_week = workouts.iter().map(|w| w.week_number).max().unwrap();
        assert_eq!(max_week as u8, info.estimated_weeks, "{}", info.slug);
        let max_session = workouts.iter().map(|w| w.session_number).max().unwrap();
        assert!(max_session as u8 <= info.days_per_week, "{}", info.slug);
    }
}
