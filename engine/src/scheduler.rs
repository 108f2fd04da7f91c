//! Calendar scheduler
//!
//! Assigns generated sessions to concrete dates by walking forward
//! from the start date and taking matching preferred weekdays in
//! order. Dates are strictly increasing in generation order.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use liftplan_shared::models::{ProgramWorkout, ScheduledWorkout, TimeOfDay};

use crate::error::{EngineError, EngineResult};

/// Caller preferences for laying sessions onto the calendar.
#[derive(Debug, Clone)]
pub struct SchedulePreferences {
    pub preferred_days: Vec<Weekday>,
    pub preferred_time_of_day: Option<TimeOfDay>,
    /// Pins session 1 to an exact date regardless of its weekday.
    pub force_first_session_date: Option<NaiveDate>,
}

/// Assign each workout a date on or after `start_date` whose weekday
/// is in `preferred_days`, preserving generation order. A forced first
/// date bypasses the weekday check for session 1 only.
pub fn generate_schedule(
    workouts: &[ProgramWorkout],
    start_date: NaiveDate,
    preferences: &SchedulePreferences,
) -> EngineResult<Vec<ScheduledWorkout>> {
    if preferences.preferred_days.is_empty() {
        return Err(EngineError::Validation(
            "at least one preferred training day is required".to_string(),
        ));
    }

    let mut scheduled = Vec::with_capacity(workouts.len());
    let mut cursor = start_date;
    for (index, workout) in workouts.iter().enumerate() {
        let date = if index == 0 {
            if let Some(forced) = preferences.force_first_session_date {
                forced
            } else {
                next_preferred_day(cursor, &preferences.preferred_days)?
            }
        } else {
            next_preferred_day(cursor, &preferences.preferred_days)?
        };
        cursor = next_day(date)?;
        scheduled.push(ScheduledWorkout {
            workout: workout.clone(),
            scheduled_date: date,
            time_of_day: preferences.preferred_time_of_day,
        });
    }
    debug!(
        sessions = scheduled.len(),
        first = ?scheduled.first().map(|s| s.scheduled_date),
        last = ?scheduled.last().map(|s| s.scheduled_date),
        "schedule generated"
    );
    Ok(scheduled)
}

/// First date on or after `from` falling on one of the given weekdays.
fn next_preferred_day(from: NaiveDate, days: &[Weekday]) -> EngineResult<NaiveDate> {
    let mut date = from;
    // Any non-empty weekday set matches within seven days.
    for _ in 0..7 {
        if days.contains(&date.weekday()) {
            return Ok(date);
        }
        date = next_day(date)?;
    }
    Err(EngineError::Validation(
        "no preferred training day matched within a week".to_string(),
    ))
}

fn next_day(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.succ_opt().ok_or_else(|| {
        EngineError::Validation(format!("schedule runs past the last representable date ({date})"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday::{Mon, Thu};
    use liftplan_shared::models::ProgramWorkout;
    use proptest::prelude::*;

    fn workouts(n: u32) -> Vec<ProgramWorkout> {
        (0..n)
            .map(|i| ProgramWorkout {
                week_number: i / 3 + 1,
                session_number: i % 3 + 1,
                session_name: format!("Session {}", i + 1),
                exercises: Vec::new(),
                accessories: Vec::new(),
            })
            .collect()
    }

    fn prefs(days: Vec<Weekday>) -> SchedulePreferences {
        SchedulePreferences {
            preferred_days: days,
            preferred_time_of_day: None,
            force_first_session_date: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_thursday_from_a_monday() {
        let scheduled =
            generate_schedule(&workouts(3), date(2024, 1, 1), &prefs(vec![Mon, Thu])).unwrap();
        let dates: Vec<_> = scheduled.iter().map(|s| s.scheduled_date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 4), date(2024, 1, 8)]
        );
    }

    #[test]
    fn start_date_not_on_a_preferred_day_rolls_forward() {
        // 2024-01-02 is a Tuesday; first Monday after is Jan 8.
        let scheduled =
            generate_schedule(&workouts(1), date(2024, 1, 2), &prefs(vec![Mon])).unwrap();
        assert_eq!(scheduled[0].scheduled_date, date(2024, 1, 8));
    }

    #[test]
    fn forced_first_date_bypasses_the_weekday_check() {
        let mut preferences = prefs(vec![Mon, Thu]);
        // A Wednesday.
        preferences.force_first_session_date = Some(date(2024, 1, 3));
        let scheduled =
            generate_schedule(&workouts(2), date(2024, 1, 1), &preferences).unwrap();
        assert_eq!(scheduled[0].scheduled_date, date(2024, 1, 3));
        // Next session resumes from the day after the pinned date.
        assert_eq!(scheduled[1].scheduled_date, date(2024, 1, 4));
    }

    #[test]
    fn empty_preferred_days_is_a_validation_error() {
        let result = generate_schedule(&workouts(1), date(2024, 1, 1), &prefs(Vec::new()));
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn time_of_day_preference_is_copied_onto_every_session() {
        let mut preferences = prefs(vec![Mon]);
        preferences.preferred_time_of_day = Some(TimeOfDay::Evening);
        let scheduled =
            generate_schedule(&workouts(2), date(2024, 1, 1), &preferences).unwrap();
        assert!(scheduled.iter().all(|s| s.time_of_day == Some(TimeOfDay::Evening)));
    }

    proptest! {
        #[test]
        fn dates_are_strictly_increasing_and_on_preferred_days(
            n in 1u32..60,
            day_offset in 0i64..365,
            day_mask in 1u8..128,
        ) {
            let all_days = [
                Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
                Weekday::Fri, Weekday::Sat, Weekday::Sun,
            ];
            let days: Vec<Weekday> = all_days
                .iter()
                .enumerate()
                .filter(|(i, _)| day_mask & (1 << i) != 0)
                .map(|(_, d)| *d)
                .collect();
            let start = date(2024, 1, 1) + chrono::Duration::days(day_offset);
            let scheduled = generate_schedule(&workouts(n), start, &prefs(days.clone())).unwrap();
            prop_assert_eq!(scheduled.len(), n as usize);
            let mut prev: Option<NaiveDate> = None;
            for s in &scheduled {
                prop_assert!(s.scheduled_date >= start);
                prop_assert!(days.contains(&s.scheduled_date.weekday()));
                if let Some(p) = prev {
                    prop_assert!(s.scheduled_date > p);
                }
                prev = Some(s.scheduled_date);
            }
        }
    }
}
