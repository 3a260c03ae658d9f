//! Routine model, mutation engine and editing vocabularies.

pub mod editor;
pub mod types;
pub mod vocabulary;

pub use editor::{coerce_reps, coerce_weight, IdGenerator, RoutineEditor};
pub use types::{Day, Exercise, MuscleGroup, Routine, RoutineType};
pub use vocabulary::{available_day_names, available_muscle_groups, MUSCLE_GROUPS, WEEKDAYS};
