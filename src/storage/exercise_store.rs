//! User-defined exercise storage operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::database::DatabaseError;
use crate::storage::student_store::parse_timestamp;

/// A custom exercise name a trainer added to one muscle group's offer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserExercise {
    pub id: String,
    pub trainer_id: String,
    pub muscle_group: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store for persisting user-defined exercises.
pub struct ExerciseStore<'a> {
    conn: &'a Connection,
}

impl<'a> ExerciseStore<'a> {
    /// Create a new exercise store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a custom exercise. Duplicate names within the same trainer and
    /// muscle group are rejected as a constraint violation.
    pub fn insert(
        &self,
        trainer_id: &str,
        muscle_group: &str,
        name: &str,
    ) -> Result<UserExercise, DatabaseError> {
        let now = Utc::now();
        let exercise = UserExercise {
            id: Uuid::new_v4().to_string(),
            trainer_id: trainer_id.to_string(),
            muscle_group: muscle_group.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.conn
            .execute(
                "INSERT INTO user_exercises (id, trainer_id, muscle_group, name,
                 created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    exercise.id,
                    exercise.trainer_id,
                    exercise.muscle_group,
                    exercise.name,
                    exercise.created_at.to_rfc3339(),
                    exercise.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DatabaseError::ConstraintViolation(format!(
                        "{} already exists for {}",
                        exercise.name, exercise.muscle_group
                    ))
                }
                other => DatabaseError::QueryFailed(other.to_string()),
            })?;

        Ok(exercise)
    }

    /// List a trainer's custom exercises, oldest first (offer-list order).
    pub fn list_for_trainer(&self, trainer_id: &str) -> Result<Vec<UserExercise>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, trainer_id, muscle_group, name, created_at, updated_at
                 FROM user_exercises WHERE trainer_id = ?1 ORDER BY created_at ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![trainer_id], row_to_exercise)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?);
        }

        Ok(exercises)
    }

    /// Delete a custom exercise by id.
    pub fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM user_exercises WHERE id = ?1", params![id])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

fn row_to_exercise(row: &Row<'_>) -> rusqlite::Result<UserExercise> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(UserExercise {
        id: row.get(0)?,
        trainer_id: row.get(1)?,
        muscle_group: row.get(2)?,
        name: row.get(3)?,
        created_at: parse_timestamp(&created_at, 4)?,
        updated_at: parse_timestamp(&updated_at, 5)?,
    })
}
