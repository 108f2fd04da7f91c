//! Stored session payload codec
//!
//! Each scheduled session keeps its full prescription as JSONB so a
//! session remains renderable exactly as generated, even after the
//! program definition changes. Older rows stored a bare exercise
//! array; both shapes parse.

use serde::{Deserialize, Serialize};

use liftplan_shared::models::{PrescribedExercise, ProgramWorkout, WorkoutAccessory};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Serialize, Deserialize)]
struct StructuredPayload {
    exercises: Vec<PrescribedExercise>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    accessories: Vec<WorkoutAccessory>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredPayload {
    Structured(StructuredPayload),
    Legacy(Vec<PrescribedExercise>),
}

/// Serialize a generated workout into its storage payload.
pub fn payload_json(workout: &ProgramWorkout) -> EngineResult<serde_json::Value> {
    let payload = StructuredPayload {
        exercises: workout.exercises.clone(),
        accessories: workout.accessories.clone(),
    };
    serde_json::to_value(payload).map_err(|e| EngineError::Internal(e.into()))
}

/// Parse a stored payload back into its prescription.
///
/// A payload that fails to parse, or parses to zero target lifts, is
/// reported as corrupt rather than passed through half-empty.
pub fn parse_session_payload(
    payload: &serde_json::Value,
) -> EngineResult<(Vec<PrescribedExercise>, Vec<WorkoutAccessory>)> {
    let parsed: StoredPayload = serde_json::from_value(payload.clone()).map_err(|e| {
        EngineError::CorruptPayload(format!("stored session payload failed to parse: {e}"))
    })?;
    let (exercises, accessories) = match parsed {
        StoredPayload::Structured(p) => (p.exercises, p.accessories),
        StoredPayload::Legacy(exercises) => (exercises, Vec::new()),
    };
    if exercises.is_empty() {
        return Err(EngineError::CorruptPayload(
            "stored session payload has no target lifts".to_string(),
        ));
    }
    Ok((exercises, accessories))
}
