//! Storage module for database and configuration.

pub mod config;
pub mod database;
pub mod exercise_store;
pub mod routine_store;
pub mod schema;
pub mod student_store;

pub use config::{load_config, save_config, AppConfig, ConfigError, TrainerProfile};
pub use database::{Database, DatabaseError};
pub use exercise_store::{ExerciseStore, UserExercise};
pub use routine_store::{RoutineRecord, RoutineStore, RoutineSummary};
pub use student_store::{Student, StudentStore};
