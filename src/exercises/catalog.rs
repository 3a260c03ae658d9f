//! Merged exercise suggestion catalog.
//!
//! Combines a trainer's user-defined exercises with the built-in defaults.
//! The custom list is read once per editing session and cached; `refresh`
//! re-reads it after the trainer adds or removes a custom exercise.

use crate::exercises::defaults;
use crate::storage::database::DatabaseError;
use crate::storage::exercise_store::ExerciseStore;

/// Session cache of user-defined exercises, merged over the defaults.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    /// (muscle group, exercise name), in store order
    custom: Vec<(String, String)>,
}

impl ExerciseCatalog {
    /// Build a catalog from pre-fetched custom exercises.
    pub fn new(custom: Vec<(String, String)>) -> Self {
        Self { custom }
    }

    /// Load the trainer's custom exercises from the store.
    pub fn from_store(store: &ExerciseStore<'_>, trainer_id: &str) -> Result<Self, DatabaseError> {
        let custom = store
            .list_for_trainer(trainer_id)?
            .into_iter()
            .map(|e| (e.muscle_group, e.name))
            .collect();
        Ok(Self { custom })
    }

    /// Re-read the custom list from the store.
    pub fn refresh(
        &mut self,
        store: &ExerciseStore<'_>,
        trainer_id: &str,
    ) -> Result<(), DatabaseError> {
        *self = Self::from_store(store, trainer_id)?;
        Ok(())
    }

    /// Suggestions for one muscle group: custom names first, then the
    /// built-ins, de-duplicated while preserving order.
    pub fn suggestions_for(&self, muscle_group: &str) -> Vec<String> {
        let mut merged: Vec<String> = Vec::new();

        let custom = self
            .custom
            .iter()
            .filter(|(group, _)| group == muscle_group)
            .map(|(_, name)| name.as_str());
        for name in custom.chain(defaults::suggestions(muscle_group).iter().copied()) {
            if !merged.iter().any(|existing| existing == name) {
                merged.push(name.to_string());
            }
        }

        merged
    }
}
