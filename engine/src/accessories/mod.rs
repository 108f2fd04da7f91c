//! Accessory catalog
//!
//! Static registry of supplemental exercises. Each entry optionally
//! ties to a main lift and a percentage of its 1RM; entries without a
//! base lift are bodyweight movements whose target weight is whatever
//! external load the caller adds (e.g. a weighted pull-up).
//!
//! Every accessory id referenced by a program definition MUST exist
//! here; a miss is a catalog misconfiguration and panics immediately.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use liftplan_shared::loading::round_to_plate;
use liftplan_shared::models::{
    LiftType, OneRmValues, ProgramAccessory, Reps, WorkoutAccessory,
};

/// Broad movement category for an accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryCategory {
    Push,
    Pull,
    Leg,
    Core,
}

/// Catalog entry for one supplemental exercise.
///
/// `library_id` identifies the movement in the external exercise
/// library and is only consumed by the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct AccessoryDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AccessoryCategory,
    pub base_lift: Option<LiftType>,
    pub default_percentage: Option<f64>,
    pub muscle_group: &'static str,
    pub library_id: &'static str,
}

use AccessoryCategory::{Core, Leg, Pull, Push};
use LiftType::{Bench, Deadlift, OverheadPress, Squat};

const CATALOG_ENTRIES: &[AccessoryDefinition] = &[
    // Push
    AccessoryDefinition { id: "dips", name: "Dips", category: Push, base_lift: Some(Bench), default_percentage: Some(0.50), muscle_group: "chest", library_id: "0251" },
    AccessoryDefinition { id: "close-grip-bench", name: "Close-Grip Bench Press", category: Push, base_lift: Some(Bench), default_percentage: Some(0.85), muscle_group: "triceps", library_id: "0162" },
    AccessoryDefinition { id: "incline-bench", name: "Incline Bench Press", category: Push, base_lift: Some(Bench), default_percentage: Some(0.80), muscle_group: "chest", library_id: "0314" },
    AccessoryDefinition { id: "db-shoulder-press", name: "Dumbbell Shoulder Press", category: Push, base_lift: Some(OverheadPress), default_percentage: Some(0.60), muscle_group: "shoulders", library_id: "0405" },
    AccessoryDefinition { id: "push-up", name: "Push-Up", category: Push, base_lift: None, default_percentage: None, muscle_group: "chest", library_id: "0662" },
    // Pull
    AccessoryDefinition { id: "barbell-row", name: "Barbell Row", category: Pull, base_lift: Some(Bench), default_percentage: Some(0.55), muscle_group: "upper back", library_id: "0027" },
    AccessoryDefinition { id: "pull-up", name: "Pull-Up", category: Pull, base_lift: None, default_percentage: None, muscle_group: "lats", library_id: "0652" },
    AccessoryDefinition { id: "chin-up", name: "Chin-Up", category: Pull, base_lift: None, default_percentage: None, muscle_group: "lats", library_id: "0150" },
    AccessoryDefinition { id: "lat-pulldown", name: "Lat Pulldown", category: Pull, base_lift: Some(Bench), default_percentage: Some(0.65), muscle_group: "lats", library_id: "0579" },
    AccessoryDefinition { id: "face-pull", name: "Face Pull", category: Pull, base_lift: None, default_percentage: None, muscle_group: "rear delts", library_id: "0233" },
    AccessoryDefinition { id: "db-curl", name: "Dumbbell Curl", category: Pull, base_lift: Some(Bench), default_percentage: Some(0.25), muscle_group: "biceps", library_id: "0285" },
    // Leg
    AccessoryDefinition { id: "front-squat", name: "Front Squat", category: Leg, base_lift: Some(Squat), default_percentage: Some(0.70), muscle_group: "quads", library_id: "0191" },
    AccessoryDefinition { id: "leg-press", name: "Leg Press", category: Leg, base_lift: Some(Squat), default_percentage: Some(1.10), muscle_group: "quads", library_id: "0739" },
    AccessoryDefinition { id: "lunge", name: "Walking Lunge", category: Leg, base_lift: Some(Squat), default_percentage: Some(0.40), muscle_group: "quads", library_id: "1460" },
    AccessoryDefinition { id: "romanian-deadlift", name: "Romanian Deadlift", category: Leg, base_lift: Some(Deadlift), default_percentage: Some(0.60), muscle_group: "hamstrings", library_id: "0085" },
    AccessoryDefinition { id: "hip-thrust", name: "Barbell Hip Thrust", category: Leg, base_lift: Some(Squat), default_percentage: Some(0.85), muscle_group: "glutes", library_id: "1060" },
    AccessoryDefinition { id: "glute-bridge", name: "Glute Bridge", category: Leg, base_lift: Some(Squat), default_percentage: Some(0.55), muscle_group: "glutes", library_id: "1409" },
    AccessoryDefinition { id: "calf-raise", name: "Standing Calf Raise", category: Leg, base_lift: Some(Squat), default_percentage: Some(0.50), muscle_group: "calves", library_id: "1373" },
    // Core
    AccessoryDefinition { id: "plank", name: "Plank", category: Core, base_lift: None, default_percentage: None, muscle_group: "core", library_id: "0463" },
    AccessoryDefinition { id: "hanging-leg-raise", name: "Hanging Leg Raise", category: Core, base_lift: None, default_percentage: None, muscle_group: "core", library_id: "0472" },
    AccessoryDefinition { id: "ab-wheel", name: "Ab Wheel Rollout", category: Core, base_lift: None, default_percentage: None, muscle_group: "core", library_id: "0857" },
];

static CATALOG: Lazy<HashMap<&'static str, &'static AccessoryDefinition>> =
    Lazy::new(|| CATALOG_ENTRIES.iter().map(|def| (def.id, def)).collect());

/// Look up a catalog entry.
pub fn definition(id: &str) -> Option<&'static AccessoryDefinition> {
    CATALOG.get(id).copied()
}

/// All catalog entries, ordered by id.
pub fn all_definitions() -> Vec<&'static AccessoryDefinition> {
    let mut defs: Vec<_> = CATALOG.values().copied().collect();
    defs.sort_by_key(|d| d.id);
    defs
}

/// Compute the target load for an accessory.
///
/// Bodyweight entries return `added_weight` verbatim. A zero base 1RM
/// means "not yet established" and yields 0 rather than an error.
///
/// # Panics
/// Panics on an unknown accessory id: that is a program definition
/// referencing an entry that does not exist, which must be caught at
/// deploy time, not handled at runtime.
pub fn accessory_weight(id: &str, one_rms: &OneRmValues, added_weight: f64) -> f64 {
    let def = definition(id)
        .unwrap_or_else(|| panic!("accessory catalog has no entry for id `{}`", id));
    weight_for(def, one_rms, added_weight)
}

fn weight_for(def: &AccessoryDefinition, one_rms: &OneRmValues, added_weight: f64) -> f64 {
    match (def.base_lift, def.default_percentage) {
        (Some(lift), Some(pct)) => {
            let base = one_rms.value_for(lift);
            if base > 0.0 {
                round_to_plate(base * pct)
            } else {
                0.0
            }
        }
        _ => added_weight,
    }
}

/// A rep prescription normalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReps {
    pub numeric_value: u32,
    pub raw: String,
}

/// Normalize a rep prescription into a numeric value plus the raw
/// string.
///
/// Descriptive strings keep their leading number ("45 sec" -> 45);
/// anything unrecognized yields 0 while preserving the raw text. This
/// is a lossy, display-oriented parse, not a validator.
pub fn parse_reps(reps: &Reps) -> ParsedReps {
    match reps {
        Reps::Count(n) => ParsedReps {
            numeric_value: *n,
            raw: n.to_string(),
        },
        Reps::Text(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            ParsedReps {
                numeric_value: digits.parse().unwrap_or(0),
                raw: s.clone(),
            }
        }
    }
}

/// Resolve a program's accessory references against a lifter's 1RMs.
///
/// # Panics
/// Panics if any referenced accessory id has no catalog entry.
pub fn resolve_accessories(
    accessories: &[ProgramAccessory],
    one_rms: &OneRmValues,
) -> Vec<WorkoutAccessory> {
    accessories
        .iter()
        .map(|acc| {
            let def = definition(&acc.accessory_id).unwrap_or_else(|| {
                panic!(
                    "program references unknown accessory id `{}`",
                    acc.accessory_id
                )
            });
            WorkoutAccessory {
                accessory_id: acc.accessory_id.clone(),
                name: def.name.to_string(),
                muscle_group: def.muscle_group.to_string(),
                sets: acc.sets,
                reps: acc.reps.clone(),
                target_weight: weight_for(def, one_rms, 0.0),
                added_weight: 0.0,
                required: acc.required,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_rms() -> OneRmValues {
        OneRmValues::new(100.0, 80.0, 120.0, 50.0)
    }

    #[test]
    fn dips_resolve_to_half_of_bench() {
        assert_eq!(accessory_weight("dips", &one_rms(), 0.0), 40.0);
    }

    #[test]
    fn bodyweight_accessory_returns_added_weight_verbatim() {
        assert_eq!(accessory_weight("pull-up", &one_rms(), 0.0), 0.0);
        assert_eq!(accessory_weight("pull-up", &one_rms(), 10.0), 10.0);
    }

    #[test]
    fn zero_base_one_rm_yields_zero_not_an_error() {
        let empty = OneRmValues::default();
        assert_eq!(accessory_weight("dips", &empty, 0.0), 0.0);
        assert_eq!(accessory_weight("hip-thrust", &empty, 0.0), 0.0);
    }

    #[test]
    fn computed_weights_are_plate_rounded() {
        for def in all_definitions() {
            let weight = weight_for(def, &one_rms(), 0.0);
            assert!(
                liftplan_shared::loading::is_plate_multiple(weight),
                "{} -> {}",
                def.id,
                weight
            );
        }
    }

    #[test]
    #[should_panic(expected = "unknown accessory id")]
    fn unknown_id_panics_during_resolution() {
        let accs = vec![ProgramAccessory {
            accessory_id: "does-not-exist".into(),
            sets: 3,
            reps: Reps::Count(10),
            required: true,
            notes: None,
        }];
        resolve_accessories(&accs, &one_rms());
    }

    #[test]
    fn resolution_carries_catalog_metadata() {
        let accs = vec![ProgramAccessory {
            accessory_id: "romanian-deadlift".into(),
            sets: 3,
            reps: Reps::Count(10),
            required: true,
            notes: None,
        }];
        let resolved = resolve_accessories(&accs, &one_rms());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Romanian Deadlift");
        assert_eq!(resolved[0].muscle_group, "hamstrings");
        assert_eq!(resolved[0].target_weight, 72.5); // 120 * 0.6 = 72, rounded
    }

    #[rstest::rstest]
    #[case(Reps::Count(8), 8, "8")]
    #[case(Reps::Text("45 sec".into()), 45, "45 sec")]
    #[case(Reps::Text("10-12".into()), 10, "10-12")]
    #[case(Reps::Text("AMRAP".into()), 0, "AMRAP")]
    fn parse_reps_is_lossy_but_keeps_raw(
        #[case] reps: Reps,
        #[case] numeric: u32,
        #[case] raw: &str,
    ) {
        assert_eq!(
            parse_reps(&reps),
            ParsedReps { numeric_value: numeric, raw: raw.into() }
        );
    }
}
