//! Day and muscle-group vocabularies and the offer-set rules the editing UI
//! uses to keep names unique per parent.

use crate::routine::types::{Routine, RoutineType};

/// Weekday labels, offered once each per routine.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Base muscle-group vocabulary for regular and full-body routines.
pub const MUSCLE_GROUPS: [&str; 9] = [
    "Chest", "Back", "Shoulders", "Biceps", "Triceps", "Legs", "Core", "Glutes", "Cardio",
];

/// Push-day groups in the push/pull/legs rotation.
pub const PUSH_GROUPS: [&str; 3] = ["Chest", "Shoulders", "Triceps"];

/// Pull-day groups in the push/pull/legs rotation.
pub const PULL_GROUPS: [&str; 2] = ["Back", "Biceps"];

/// Leg-day groups in the push/pull/legs rotation.
pub const LEG_GROUPS: [&str; 4] = ["Legs", "Glutes", "Hamstrings", "Calves"];

/// Groups offered on every day of a push/pull/legs routine.
pub const EVERY_DAY_GROUPS: [&str; 3] = ["Core", "Hip Flexors", "Isometrics"];

/// Weekday names not yet used by the routine, in vocabulary order.
pub fn available_day_names(routine: &Routine) -> Vec<&'static str> {
    WEEKDAYS
        .iter()
        .copied()
        .filter(|name| !routine.days.iter().any(|d| d.name == *name))
        .collect()
}

/// Muscle-group names that may still be added to the given day.
///
/// Names already used on the day are excluded. For push/pull/legs routines
/// the offer set is further restricted by the day's role in the rotation.
/// The role follows the day's current position in the list (index modulo 3),
/// so removing or reordering days reshuffles the roles of the days after it.
pub fn available_muscle_groups(routine: &Routine, day_id: &str) -> Vec<&'static str> {
    let Some(day) = routine.days.iter().find(|d| d.id == day_id) else {
        return MUSCLE_GROUPS.to_vec();
    };

    let allowed: Vec<&'static str> = if routine.routine_type == RoutineType::PushPullLegs {
        let position = routine
            .days
            .iter()
            .position(|d| d.id == day_id)
            .unwrap_or(0);
        let rotation: &[&'static str] = match position % 3 {
            0 => &PUSH_GROUPS,
            1 => &PULL_GROUPS,
            _ => &LEG_GROUPS,
        };
        rotation
            .iter()
            .chain(EVERY_DAY_GROUPS.iter())
            .copied()
            .collect()
    } else {
        MUSCLE_GROUPS.to_vec()
    };

    allowed
        .into_iter()
        .filter(|name| !day.muscle_groups.iter().any(|g| g.name == *name))
        .collect()
}
