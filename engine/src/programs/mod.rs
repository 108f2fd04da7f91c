//! Program definitions
//!
//! Each training program implements [`ProgramDefinition`]: a static
//! descriptor plus pure generation of every session of a full cycle
//! from the lifter's 1RMs. Generation is deterministic; the same
//! inputs always produce the same workouts.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use liftplan_shared::loading::{round_to_plate, training_max};
use liftplan_shared::models::{
    LiftType, OneRmValues, PrescribedExercise, ProgramAccessory, ProgramInfo, ProgramWorkout,
    Reps,
};

mod candito_six_week;
mod glute_builder;
mod nsuns_lp;
mod power_wave;
mod russian_power;
mod stronglifts;
mod texas_method;
mod tm_wave;
mod womens_upper_lower;

pub use candito_six_week::CanditoSixWeek;
pub use glute_builder::GluteBuilder;
pub use nsuns_lp::NsunsLp;
pub use power_wave::PowerWave;
pub use russian_power::RussianPower;
pub use stronglifts::StrongLifts5x5;
pub use texas_method::TexasMethod;
pub use tm_wave::TmWave;
pub use womens_upper_lower::WomensUpperLower;

/// Contract every training program fulfills.
pub trait ProgramDefinition: Send + Sync {
    /// Static metadata describing the program.
    fn info(&self) -> ProgramInfo;

    /// Generate every session of one full cycle, ordered by
    /// (week_number, session_number).
    fn generate_workouts(&self, one_rms: &OneRmValues) -> Vec<ProgramWorkout>;

    /// Target load for a given lift at a given point in the cycle.
    fn target_weight(
        &self,
        estimated_one_rm: f64,
        week: u32,
        session: u32,
        lift: LiftType,
    ) -> f64;

    /// Accessory work attached to a given session. Most barbell-only
    /// programs prescribe none.
    fn accessories(&self, _week: u32, _session: u32) -> Vec<ProgramAccessory> {
        Vec::new()
    }
}

static REGISTRY: Lazy<HashMap<&'static str, Box<dyn ProgramDefinition>>> = Lazy::new(|| {
    let programs: Vec<Box<dyn ProgramDefinition>> = vec![
        Box::new(StrongLifts5x5),
        Box::new(TexasMethod),
        Box::new(PowerWave),
        Box::new(CanditoSixWeek),
        Box::new(NsunsLp),
        Box::new(RussianPower),
        Box::new(TmWave),
        Box::new(GluteBuilder),
        Box::new(WomensUpperLower),
    ];
    programs
        .into_iter()
        .map(|p| {
            let slug: &'static str = Box::leak(p.info().slug.into_boxed_str());
            (slug, p)
        })
        .collect()
});

/// Look up a program by slug.
pub fn find_program(slug: &str) -> Option<&'static dyn ProgramDefinition> {
    REGISTRY.get(slug).map(|p| p.as_ref())
}

/// All registered programs, ordered by slug.
pub fn all_programs() -> Vec<&'static dyn ProgramDefinition> {
    let mut programs: Vec<_> = REGISTRY.values().map(|p| p.as_ref()).collect();
    programs.sort_by_key(|p| p.info().slug);
    programs
}

/// Round a percentage of an estimated 1RM to the plate increment,
/// logging when the base is unset so a zero target is traceable.
pub(crate) fn pct_of(estimated_one_rm: f64, pct: f64, lift: LiftType) -> f64 {
    if estimated_one_rm <= 0.0 {
        warn!(lift = %lift.display_name(), "no 1RM on record, prescribing zero load");
        return 0.0;
    }
    round_to_plate(estimated_one_rm * pct)
}

/// Percentage of the 90 % training max derived from an estimated 1RM.
/// The wave programs build their tables on this de-rated base.
pub(crate) fn pct_of_tm(estimated_one_rm: f64, pct: f64, lift: LiftType) -> f64 {
    pct_of(training_max(estimated_one_rm), pct, lift)
}

/// A straight working prescription for a main lift.
pub(crate) fn main_exercise(
    lift: LiftType,
    sets: u32,
    reps: u32,
    target_weight: f64,
) -> PrescribedExercise {
    PrescribedExercise {
        name: lift.display_name().to_string(),
        lift,
        sets,
        reps,
        target_weight,
        is_amrap: false,
    }
}

/// A single as-many-reps-as-possible set with a rep floor.
pub(crate) fn amrap_set(lift: LiftType, rep_floor: u32, target_weight: f64) -> PrescribedExercise {
    PrescribedExercise {
        name: format!("{} (AMRAP)", lift.display_name()),
        lift,
        sets: 1,
        reps: rep_floor,
        target_weight,
        is_amrap: true,
    }
}

/// Shorthand for a required program accessory.
pub(crate) fn acc(accessory_id: &str, sets: u32, reps: impl Into<Reps>) -> ProgramAccessory {
    ProgramAccessory {
        accessory_id: accessory_id.to_string(),
        sets,
        reps: reps.into(),
        required: true,
        notes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessories;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(140.0, 100.0, 180.0, 60.0)
    }

    #[test]
    fn registry_contains_all_nine_programs() {
        let slugs: Vec<_> = all_programs().iter().map(|p| p.info().slug).collect();
        assert_eq!(
            slugs,
            vec![
                "candito-six-week",
                "glute-builder",
                "nsuns-lp",
                "power-wave",
                "russian-power",
                "stronglifts-5x5",
                "texas-method",
                "tm-wave",
                "womens-upper-lower",
            ]
        );
    }

    #[test]
    fn find_program_misses_unknown_slug() {
        assert!(find_program("stronglifts-5x5").is_some());
        assert!(find_program("no-such-program").is_none());
    }

    #[test]
    fn every_program_generates_exactly_its_declared_session_count() {
        for program in all_programs() {
            let info = program.info();
            let workouts = program.generate_workouts(&one_rms());
            assert_eq!(
                workouts.len() as u32,
                info.total_sessions,
                "{}",
                info.slug
            );
        }
    }

    #[test]
    fn workouts_are_ordered_and_numbered_strictly() {
        for program in all_programs() {
            let workouts = program.generate_workouts(&one_rms());
            let mut prev: Option<(u32, u32)> = None;
            for w in &workouts {
                let key = (w.week_number, w.session_number);
                if let Some(p) = prev {
                    assert!(key > p, "{}: {:?} after {:?}", program.info().slug, key, p);
                }
                prev = Some(key);
            }
        }
    }

    #[test]
    fn session_numbers_restart_each_week() {
        for program in all_programs() {
            let info = program.info();
            let mut expected = 1;
            let mut week = 1;
            for w in program.generate_workouts(&one_rms()) {
                if w.week_number != week {
                    week = w.week_number;
                    expected = 1;
                }
                assert_eq!(
                    w.session_number, expected,
                    "{}: week {}",
                    info.slug, week
                );
                assert!(w.session_number as u8 <= info.days_per_week, "{}", info.slug);
                expected += 1;
            }
        }
    }

    #[test]
    fn every_referenced_accessory_exists_in_the_catalog() {
        for program in all_programs() {
            for w in program.generate_workouts(&one_rms()) {
                for a in &w.accessories {
                    assert!(
                        accessories::definition(&a.accessory_id).is_some(),
                        "{} references `{}`",
                        program.info().slug,
                        a.accessory_id
                    );
                }
            }
        }
    }

    #[test]
    fn all_targets_sit_on_the_plate_increment() {
        for program in all_programs() {
            for w in program.generate_workouts(&one_rms()) {
                for e in &w.exercises {
                    assert!(
                        liftplan_shared::loading::is_plate_multiple(e.target_weight),
                        "{} {} -> {}",
                        program.info().slug,
                        e.name,
                        e.target_weight
                    );
                }
            }
        }
    }

    #[test]
    fn zero_one_rms_produce_zero_loads_not_failures() {
        for program in all_programs() {
            for w in program.generate_workouts(&OneRmValues::default()) {
                for e in &w.exercises {
                    assert_eq!(e.target_weight, 0.0, "{}", program.info().slug);
                }
            }
        }
    }
}
