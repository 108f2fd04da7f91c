//! Core domain models for the program generation engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

// ============================================================================
// Lifts and 1RMs
// ============================================================================

/// Barbell lifts the catalog prescribes.
///
/// Programs treat squat, bench, deadlift, and overhead press as main
/// lifts. Row is a derived lift: its loads are percentage-keyed off the
/// bench 1RM rather than tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiftType {
    Squat,
    Bench,
    Deadlift,
    OverheadPress,
    Row,
}

impl LiftType {
    /// The four lifts a 1RM is tracked for.
    pub const MAIN_LIFTS: [LiftType; 4] = [
        LiftType::Squat,
        LiftType::Bench,
        LiftType::Deadlift,
        LiftType::OverheadPress,
    ];

    /// Exercise name used in generated prescriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            LiftType::Squat => "Squat",
            LiftType::Bench => "Bench Press",
            LiftType::Deadlift => "Deadlift",
            LiftType::OverheadPress => "Overhead Press",
            LiftType::Row => "Barbell Row",
        }
    }
}

impl fmt::Display for LiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A lifter's one-rep maxes for the four main lifts.
///
/// Zero means "not yet established"; generation degrades to zero-weight
/// prescriptions for that lift rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OneRmValues {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
    pub overhead_press: f64,
}

impl OneRmValues {
    pub fn new(squat: f64, bench: f64, deadlift: f64, overhead_press: f64) -> Self {
        Self {
            squat,
            bench,
            deadlift,
            overhead_press,
        }
    }

    /// The 1RM a prescription for `lift` is keyed off.
    ///
    /// Row has no tracked 1RM of its own and reads the bench value.
    pub fn value_for(&self, lift: LiftType) -> f64 {
        match lift {
            LiftType::Squat => self.squat,
            LiftType::Bench | LiftType::Row => self.bench,
            LiftType::Deadlift => self.deadlift,
            LiftType::OverheadPress => self.overhead_press,
        }
    }

    pub fn set_for(&mut self, lift: LiftType, value: f64) {
        match lift {
            LiftType::Squat => self.squat = value,
            LiftType::Bench | LiftType::Row => self.bench = value,
            LiftType::Deadlift => self.deadlift = value,
            LiftType::OverheadPress => self.overhead_press = value,
        }
    }

    pub fn any_nonzero(&self) -> bool {
        self.squat > 0.0 || self.bench > 0.0 || self.deadlift > 0.0 || self.overhead_press > 0.0
    }
}

// ============================================================================
// Program descriptors
// ============================================================================

/// Program difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Program category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramCategory {
    Powerlifting,
    GeneralStrength,
    Womens,
}

/// Static descriptor for one program definition.
///
/// One instance per definition, built at process start and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramInfo {
    /// Stable identifier used by callers to select the program.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub days_per_week: u8,
    pub estimated_weeks: u8,
    pub total_sessions: u32,
    pub main_lifts: Vec<LiftType>,
    pub category: ProgramCategory,
}

// ============================================================================
// Generated workouts
// ============================================================================

/// A rep prescription: a plain count, or a descriptive string such as
/// "45 sec" or "AMRAP".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Text(String),
}

impl From<u32> for Reps {
    fn from(count: u32) -> Self {
        Reps::Count(count)
    }
}

impl From<&str> for Reps {
    fn from(text: &str) -> Self {
        Reps::Text(text.to_string())
    }
}

/// One prescribed exercise within a generated session.
///
/// `is_amrap` sets carry only a floor rep count; the lifter takes the
/// set as far as it goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedExercise {
    pub name: String,
    pub lift: LiftType,
    pub sets: u32,
    pub reps: u32,
    pub target_weight: f64,
    #[serde(default)]
    pub is_amrap: bool,
}

/// A program's reference to an accessory catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramAccessory {
    pub accessory_id: String,
    pub sets: u32,
    pub reps: Reps,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An accessory prescription resolved against a lifter's 1RMs.
///
/// This is the only computed accessory representation; it is what gets
/// serialized into the session payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutAccessory {
    pub accessory_id: String,
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: Reps,
    pub target_weight: f64,
    #[serde(default)]
    pub added_weight: f64,
    pub required: bool,
}

/// One generated session, before scheduling and persistence.
///
/// `week_number`/`session_number` pairs are unique and strictly
/// increasing in generation order; `session_number` restarts at 1
/// each week, running to the program's sessions per week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWorkout {
    pub week_number: u32,
    pub session_number: u32,
    pub session_name: String,
    pub exercises: Vec<PrescribedExercise>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessories: Vec<WorkoutAccessory>,
}

// ============================================================================
// Scheduling
// ============================================================================

/// Coarse time-of-day slot applied uniformly to a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            _ => Err(format!("Unknown time of day: {}", s)),
        }
    }
}

/// A generated session pinned to a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub workout: ProgramWorkout,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

// ============================================================================
// Cycle state
// ============================================================================

/// Lifecycle state of a user's program cycle.
///
/// `Completed` and `Deleted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    Active,
    Completed,
    Deleted,
}

impl CycleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStatus::Active => "active",
            CycleStatus::Completed => "completed",
            CycleStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CycleStatus::Active),
            "completed" => Ok(CycleStatus::Completed),
            "deleted" => Ok(CycleStatus::Deleted),
            _ => Err(format!("Unknown cycle status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reads_the_bench_one_rm() {
        let one_rms = OneRmValues::new(100.0, 80.0, 120.0, 50.0);
        assert_eq!(one_rms.value_for(LiftType::Row), 80.0);
        assert_eq!(one_rms.value_for(LiftType::Bench), 80.0);
    }

    #[test]
    fn any_nonzero_detects_empty_inputs() {
        assert!(!OneRmValues::default().any_nonzero());
        assert!(OneRmValues::new(0.0, 0.0, 60.0, 0.0).any_nonzero());
    }

    #[test]
    fn reps_serialize_untagged() {
        assert_eq!(serde_json::to_string(&Reps::Count(8)).unwrap(), "8");
        assert_eq!(
            serde_json::to_string(&Reps::Text("45 sec".into())).unwrap(),
            "\"45 sec\""
        );

        let count: Reps = serde_json::from_str("8").unwrap();
        assert_eq!(count, Reps::Count(8));
        let text: Reps = serde_json::from_str("\"AMRAP\"").unwrap();
        assert_eq!(text, Reps::Text("AMRAP".into()));
    }

    #[test]
    fn lift_type_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&LiftType::OverheadPress).unwrap(),
            "\"overhead-press\""
        );
    }

    #[test]
    fn cycle_status_round_trips_through_str() {
        for status in [
            CycleStatus::Active,
            CycleStatus::Completed,
            CycleStatus::Deleted,
        ] {
            assert_eq!(status.as_str().parse::<CycleStatus>().unwrap(), status);
        }
        assert!("archived".parse::<CycleStatus>().is_err());
    }
}
