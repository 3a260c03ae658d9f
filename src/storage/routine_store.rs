//! Persisted routine storage operations.
//!
//! The routine tree is stored as JSON in the `routine_data` column, exactly
//! as produced by the editor; no transformation happens on either side.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routine::Routine;
use crate::storage::database::DatabaseError;
use crate::storage::student_store::parse_timestamp;

/// A stored routine row with its decoded routine tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineRecord {
    pub id: String,
    pub trainer_id: String,
    pub student_id: String,
    pub name: String,
    pub routine: Routine,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A routine row joined with the owning student's name, for listings.
#[derive(Debug, Clone)]
pub struct RoutineSummary {
    pub record: RoutineRecord,
    pub student_name: String,
}

/// Store for persisting routines.
pub struct RoutineStore<'a> {
    conn: &'a Connection,
}

impl<'a> RoutineStore<'a> {
    /// Create a new routine store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a routine for a trainer/student pair and return the stored
    /// record. Falls back to a dated name when the routine carries none.
    pub fn insert(
        &self,
        trainer_id: &str,
        student_id: &str,
        routine: &Routine,
    ) -> Result<RoutineRecord, DatabaseError> {
        let routine_data = serde_json::to_string(routine)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        let now = Utc::now();
        let name = if routine.name.trim().is_empty() {
            format!("Routine {}", now.format("%Y-%m-%d"))
        } else {
            routine.name.clone()
        };

        let record = RoutineRecord {
            id: Uuid::new_v4().to_string(),
            trainer_id: trainer_id.to_string(),
            student_id: student_id.to_string(),
            name,
            routine: routine.clone(),
            created_at: now,
            updated_at: now,
        };

        self.conn
            .execute(
                "INSERT INTO routines (id, trainer_id, student_id, name, routine_data,
                 created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.trainer_id,
                    record.student_id,
                    record.name,
                    routine_data,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(record)
    }

    /// Replace the routine tree of an existing row; bumps `updated_at`.
    pub fn update(&self, id: &str, routine: &Routine) -> Result<(), DatabaseError> {
        let routine_data = serde_json::to_string(routine)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        let changed = self
            .conn
            .execute(
                "UPDATE routines SET routine_data = ?2, updated_at = ?3 WHERE id = ?1",
                params![id, routine_data, Utc::now().to_rfc3339()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if changed == 0 {
            return Err(DatabaseError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Get a routine by id.
    pub fn get(&self, id: &str) -> Result<Option<RoutineRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, trainer_id, student_id, name, routine_data, created_at, updated_at
                 FROM routines WHERE id = ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![id], row_to_record);

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// List all routines owned by a trainer with student names, newest first.
    pub fn list_for_trainer(&self, trainer_id: &str) -> Result<Vec<RoutineSummary>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT r.id, r.trainer_id, r.student_id, r.name, r.routine_data,
                        r.created_at, r.updated_at, s.name
                 FROM routines r JOIN students s ON s.id = r.student_id
                 WHERE r.trainer_id = ?1 ORDER BY r.created_at DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![trainer_id], |row| {
                let record = row_to_record(row)?;
                let student_name: String = row.get(7)?;
                Ok(RoutineSummary {
                    record,
                    student_name,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?);
        }

        Ok(summaries)
    }

    /// List routines for one student, newest first.
    pub fn list_for_student(&self, student_id: &str) -> Result<Vec<RoutineRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, trainer_id, student_id, name, routine_data, created_at, updated_at
                 FROM routines WHERE student_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![student_id], row_to_record)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?);
        }

        Ok(records)
    }

    /// Delete a routine by id.
    pub fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM routines WHERE id = ?1", params![id])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<RoutineRecord> {
    let routine_data: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    let routine: Routine = serde_json::from_str(&routine_data).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(RoutineRecord {
        id: row.get(0)?,
        trainer_id: row.get(1)?,
        student_id: row.get(2)?,
        name: row.get(3)?,
        routine,
        created_at: parse_timestamp(&created_at, 5)?,
        updated_at: parse_timestamp(&updated_at, 6)?,
    })
}
