//! Database schema definitions for Forza.

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// SQL for the schema version table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL
);
"#;

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Students table
CREATE TABLE IF NOT EXISTS students (
    id TEXT PRIMARY KEY,
    trainer_id TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    age INTEGER,
    gender TEXT,
    height_cm REAL,
    weight_kg REAL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_students_trainer_id ON students(trainer_id);

-- Routines table (routine_data holds the routine tree as JSON)
CREATE TABLE IF NOT EXISTS routines (
    id TEXT PRIMARY KEY,
    trainer_id TEXT NOT NULL,
    student_id TEXT NOT NULL REFERENCES students(id),
    name TEXT NOT NULL,
    routine_data TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_routines_trainer_id ON routines(trainer_id);
CREATE INDEX IF NOT EXISTS idx_routines_student_id ON routines(student_id);

-- User-defined exercises table
CREATE TABLE IF NOT EXISTS user_exercises (
    id TEXT PRIMARY KEY,
    trainer_id TEXT NOT NULL,
    muscle_group TEXT NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE(trainer_id, muscle_group, name)
);

CREATE INDEX IF NOT EXISTS idx_user_exercises_trainer_id ON user_exercises(trainer_id);
"#;
