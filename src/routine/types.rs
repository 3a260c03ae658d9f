//! Routine data model.
//!
//! A routine is an ordered tree: Days contain Muscle Groups, which contain
//! Exercises, which carry one reps and one weight value per set. The JSON
//! representation uses camelCase field names so it round-trips with the
//! `routine_data` column written by earlier releases.

use serde::{Deserialize, Serialize};

/// Default reps value seeded into new sets.
pub const DEFAULT_REPS: u32 = 10;

/// Default weight (kg) seeded into new sets.
pub const DEFAULT_WEIGHT_KG: f64 = 0.0;

/// Routine flavor, selecting both the muscle-group offer set and the PDF layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoutineType {
    /// Free-form weekly split, one table per muscle group
    #[default]
    Regular,
    /// Whole-body sessions, rendered as one merged table per day
    FullBody,
    /// Push/pull/legs rotation derived from day position
    PushPullLegs,
}

impl std::fmt::Display for RoutineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutineType::Regular => write!(f, "Regular"),
            RoutineType::FullBody => write!(f, "Full Body"),
            RoutineType::PushPullLegs => write!(f, "Push/Pull/Legs"),
        }
    }
}

/// A named movement with a set count and parallel per-set reps/weight lists.
///
/// Invariant: `reps.len() == weight.len() == series as usize` and
/// `series >= 1` at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique among siblings
    pub id: String,
    /// Free text or a suggestion from the exercise catalog
    pub name: String,
    /// Number of sets
    pub series: u32,
    /// Target reps, one entry per set
    pub reps: Vec<u32>,
    /// Load in kilograms, one entry per set
    pub weight: Vec<f64>,
    /// Free-text notes, may be empty
    pub details: String,
}

impl Exercise {
    /// Create an exercise with the default single set.
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            series: 1,
            reps: vec![DEFAULT_REPS],
            weight: vec![DEFAULT_WEIGHT_KG],
            details: String::new(),
        }
    }
}

/// A named cluster of exercises targeting one body region within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroup {
    /// Unique among siblings
    pub id: String,
    /// Drawn from the muscle-group vocabulary; unique within its day
    pub name: String,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}

impl MuscleGroup {
    /// Create an empty muscle group.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            exercises: Vec::new(),
        }
    }
}

/// One training session within a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Unique among siblings
    pub id: String,
    /// Weekday label; unique within the routine under the default flow
    pub name: String,
    /// Ordered muscle groups
    pub muscle_groups: Vec<MuscleGroup>,
}

impl Day {
    /// Create an empty day.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            muscle_groups: Vec::new(),
        }
    }
}

/// The full workout plan for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Empty string until persisted
    pub id: String,
    /// Display label; falls back to the student lookup when empty
    pub name: String,
    /// Reference to the owning student record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    /// Layout and offer-set flavor
    #[serde(rename = "type", default)]
    pub routine_type: RoutineType,
    /// Ordered training days; order is the weekly schedule and print order
    pub days: Vec<Day>,
}

impl Routine {
    /// The empty skeleton every editing session starts from.
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            student_id: None,
            routine_type: RoutineType::Regular,
            days: Vec::new(),
        }
    }
}

impl Default for Routine {
    fn default() -> Self {
        Self::empty()
    }
}
