//! Routine mutation engine.
//!
//! `RoutineEditor` owns the routine being edited and exposes the closed set
//! of path-addressed mutations the editing UI drives. Every operation is
//! total: unknown ids and out-of-range indices are no-ops, so the model can
//! never be pushed into an inconsistent state by a stale caller.

use uuid::Uuid;

use crate::routine::types::{
    Day, Exercise, MuscleGroup, Routine, DEFAULT_REPS, DEFAULT_WEIGHT_KG,
};
use crate::routine::RoutineType;

/// Injected id source, so tests can pin deterministic ids.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

fn uuid_ids() -> IdGenerator {
    Box::new(|| Uuid::new_v4().to_string())
}

/// Coerce user input to a reps value. Anything that does not parse as a
/// positive integer falls back to 1.
pub fn coerce_reps(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Coerce user input to a weight in kilograms. Anything that does not parse
/// as a non-negative finite number falls back to 0.
pub fn coerce_weight(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => w,
        _ => 0.0,
    }
}

/// Owned-state editor for a single routine.
///
/// One editor instance per editing session; callers serialize access (the
/// surrounding event loop runs one user action at a time).
pub struct RoutineEditor {
    routine: Routine,
    ids: IdGenerator,
}

impl RoutineEditor {
    /// Create an editor over the empty skeleton with UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(uuid_ids())
    }

    /// Create an editor with a custom id source.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            routine: Routine::empty(),
            ids,
        }
    }

    /// The current routine value.
    pub fn routine(&self) -> &Routine {
        &self.routine
    }

    /// Build a day with a freshly generated id, ready for [`add_day`].
    ///
    /// [`add_day`]: RoutineEditor::add_day
    pub fn make_day(&self, name: &str) -> Day {
        Day::new((self.ids)(), name.to_string())
    }

    /// Set the routine display name.
    pub fn set_name(&mut self, name: &str) {
        self.routine.name = name.to_string();
    }

    /// Select the student this routine belongs to.
    pub fn set_student(&mut self, student_id: &str) {
        self.routine.student_id = Some(student_id.to_string());
    }

    /// Change the routine flavor.
    pub fn set_routine_type(&mut self, routine_type: RoutineType) {
        self.routine.routine_type = routine_type;
    }

    /// Replace the routine with the empty skeleton.
    ///
    /// Used both for "start fresh" and post-save cleanup.
    pub fn reset(&mut self) {
        self.routine = Routine::empty();
    }

    /// Replace the routine wholesale (edit-mode hydration). The caller
    /// supplies a value already satisfying the model invariants.
    pub fn load(&mut self, routine: Routine) {
        self.routine = routine;
    }

    /// Append a fully-formed day. The caller keeps the offer set free of
    /// already-used day names and supplies a fresh id.
    pub fn add_day(&mut self, day: Day) {
        self.routine.days.push(day);
    }

    /// Remove a day and all its descendants.
    pub fn remove_day(&mut self, day_id: &str) {
        self.routine.days.retain(|d| d.id != day_id);
    }

    /// Append a muscle group with a generated id to the given day.
    pub fn add_muscle_group(&mut self, day_id: &str, name: &str) {
        let id = (self.ids)();
        if let Some(day) = self.day_mut(day_id) {
            day.muscle_groups.push(MuscleGroup::new(id, name.to_string()));
        }
    }

    /// Remove a muscle group and its exercises.
    pub fn remove_muscle_group(&mut self, day_id: &str, group_id: &str) {
        if let Some(day) = self.day_mut(day_id) {
            day.muscle_groups.retain(|g| g.id != group_id);
        }
    }

    /// Append a default exercise (one set, reps 10, weight 0) to a group.
    pub fn add_exercise(&mut self, day_id: &str, group_id: &str) {
        let id = (self.ids)();
        if let Some(group) = self.group_mut(day_id, group_id) {
            group.exercises.push(Exercise::new(id));
        }
    }

    /// Remove an exercise.
    pub fn remove_exercise(&mut self, day_id: &str, group_id: &str, exercise_id: &str) {
        if let Some(group) = self.group_mut(day_id, group_id) {
            group.exercises.retain(|e| e.id != exercise_id);
        }
    }

    /// Rename an exercise.
    pub fn set_exercise_name(
        &mut self,
        day_id: &str,
        group_id: &str,
        exercise_id: &str,
        name: &str,
    ) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            ex.name = name.to_string();
        }
    }

    /// Append one set, seeding the default reps and weight.
    pub fn add_set(&mut self, day_id: &str, group_id: &str, exercise_id: &str) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            ex.series += 1;
            ex.reps.push(DEFAULT_REPS);
            ex.weight.push(DEFAULT_WEIGHT_KG);
        }
    }

    /// Remove the set at `set_index`. A no-op when only one set remains or
    /// the index is out of range, so the arrays never shrink below length 1.
    pub fn remove_set(&mut self, day_id: &str, group_id: &str, exercise_id: &str, set_index: usize) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            if ex.series <= 1 || set_index >= ex.reps.len() {
                return;
            }
            ex.series -= 1;
            ex.reps.remove(set_index);
            ex.weight.remove(set_index);
        }
    }

    /// Replace the reps value of one set. Values below 1 clamp to 1.
    pub fn set_reps(
        &mut self,
        day_id: &str,
        group_id: &str,
        exercise_id: &str,
        set_index: usize,
        reps: u32,
    ) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            if let Some(slot) = ex.reps.get_mut(set_index) {
                *slot = reps.max(1);
            }
        }
    }

    /// Replace the weight of one set. Negative or non-finite values clamp to 0.
    pub fn set_weight(
        &mut self,
        day_id: &str,
        group_id: &str,
        exercise_id: &str,
        set_index: usize,
        weight_kg: f64,
    ) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            if let Some(slot) = ex.weight.get_mut(set_index) {
                *slot = if weight_kg.is_finite() && weight_kg >= 0.0 {
                    weight_kg
                } else {
                    0.0
                };
            }
        }
    }

    /// Replace the free-text notes.
    pub fn set_details(&mut self, day_id: &str, group_id: &str, exercise_id: &str, details: &str) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            ex.details = details.to_string();
        }
    }

    /// Set the number of sets, resizing reps/weight to match. Existing
    /// values are kept at their indices; new slots get the defaults;
    /// truncation drops trailing entries. Clamped to a minimum of 1.
    pub fn set_series(&mut self, day_id: &str, group_id: &str, exercise_id: &str, series: u32) {
        if let Some(ex) = self.exercise_mut(day_id, group_id, exercise_id) {
            let series = series.max(1);
            ex.series = series;
            ex.reps.resize(series as usize, DEFAULT_REPS);
            ex.weight.resize(series as usize, DEFAULT_WEIGHT_KG);
        }
    }

    fn day_mut(&mut self, day_id: &str) -> Option<&mut Day> {
        self.routine.days.iter_mut().find(|d| d.id == day_id)
    }

    fn group_mut(&mut self, day_id: &str, group_id: &str) -> Option<&mut MuscleGroup> {
        self.day_mut(day_id)?
            .muscle_groups
            .iter_mut()
            .find(|g| g.id == group_id)
    }

    fn exercise_mut(
        &mut self,
        day_id: &str,
        group_id: &str,
        exercise_id: &str,
    ) -> Option<&mut Exercise> {
        self.group_mut(day_id, group_id)?
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
    }
}

impl Default for RoutineEditor {
    fn default() -> Self {
        Self::new()
    }
}
