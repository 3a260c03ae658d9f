//! Forza - Workout Routine Builder
//!
//! A library for personal trainers: model weekly workout routines
//! (days, muscle groups, exercises, sets), edit them through an atomic
//! mutation engine, persist students and routines in SQLite, and export
//! routines as paginated, optionally watermarked PDF documents.

pub mod exercises;
pub mod export;
pub mod routine;
pub mod storage;

// Re-export commonly used types
pub use exercises::ExerciseCatalog;
pub use export::{RenderedDocument, RoutineDocument};
pub use routine::{Routine, RoutineEditor, RoutineType};
pub use storage::Database;
