//! Student record storage operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::document::StudentLookup;
use crate::storage::database::DatabaseError;

/// A student coached by a trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub trainer_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student record for the given trainer.
    pub fn new(trainer_id: &str, name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            trainer_id: trainer_id.to_string(),
            name: name.to_string(),
            email: None,
            phone: None,
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Store for persisting students.
pub struct StudentStore<'a> {
    conn: &'a Connection,
}

impl<'a> StudentStore<'a> {
    /// Create a new student store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new student.
    pub fn insert(&self, student: &Student) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO students (id, trainer_id, name, email, phone, age, gender,
                 height_cm, weight_kg, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    student.id,
                    student.trainer_id,
                    student.name,
                    student.email,
                    student.phone,
                    student.age,
                    student.gender,
                    student.height_cm,
                    student.weight_kg,
                    student.created_at.to_rfc3339(),
                    student.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Get a student by id.
    pub fn get(&self, id: &str) -> Result<Option<Student>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, trainer_id, name, email, phone, age, gender, height_cm,
                 weight_kg, created_at, updated_at FROM students WHERE id = ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![id], row_to_student);

        match result {
            Ok(student) => Ok(Some(student)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// List all students belonging to a trainer, newest first.
    pub fn list_for_trainer(&self, trainer_id: &str) -> Result<Vec<Student>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, trainer_id, name, email, phone, age, gender, height_cm,
                 weight_kg, created_at, updated_at FROM students
                 WHERE trainer_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![trainer_id], row_to_student)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?);
        }

        Ok(students)
    }

    /// Update a student's editable fields; bumps `updated_at`.
    pub fn update(&self, student: &Student) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE students SET name = ?2, email = ?3, phone = ?4, age = ?5,
                 gender = ?6, height_cm = ?7, weight_kg = ?8, updated_at = ?9
                 WHERE id = ?1",
                params![
                    student.id,
                    student.name,
                    student.email,
                    student.phone,
                    student.age,
                    student.gender,
                    student.height_cm,
                    student.weight_kg,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if changed == 0 {
            return Err(DatabaseError::NotFound(student.id.clone()));
        }

        Ok(())
    }

    /// Delete a student by id.
    pub fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

impl StudentLookup for StudentStore<'_> {
    fn student_name(&self, student_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.get(student_id)?.map(|s| s.name))
    }
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;

    Ok(Student {
        id: row.get(0)?,
        trainer_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        age: row.get(5)?,
        gender: row.get(6)?,
        height_cm: row.get(7)?,
        weight_kg: row.get(8)?,
        created_at: parse_timestamp(&created_at, 9)?,
        updated_at: parse_timestamp(&updated_at, 10)?,
    })
}

/// Parse an RFC3339 timestamp stored as TEXT.
pub(crate) fn parse_timestamp(value: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
