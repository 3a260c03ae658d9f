//! Unit tests for input coercion, offer sets and download naming, through
//! the public API.

use forza::export::document_filename;
use forza::routine::{
    available_day_names, available_muscle_groups, coerce_reps, coerce_weight, Day, RoutineEditor,
    RoutineType,
};

#[test]
fn test_coercion_boundaries() {
    assert_eq!(coerce_reps("15"), 15);
    assert_eq!(coerce_reps("zero"), 1);
    assert_eq!(coerce_reps("0"), 1);

    assert_eq!(coerce_weight("80.25"), 80.25);
    assert_eq!(coerce_weight("none"), 0.0);
    assert_eq!(coerce_weight("-12"), 0.0);
}

#[test]
fn test_filename_derivation() {
    assert_eq!(document_filename("Luis Perez"), "routine_Luis_Perez.pdf");
    assert_eq!(document_filename("Ana"), "routine_Ana.pdf");
}

#[test]
fn test_day_offer_set_shrinks_as_days_are_added() {
    let mut editor = RoutineEditor::new();
    assert_eq!(available_day_names(editor.routine()).len(), 7);

    editor.add_day(Day::new("d1".to_string(), "Monday".to_string()));
    editor.add_day(Day::new("d2".to_string(), "Friday".to_string()));

    let available = available_day_names(editor.routine());
    assert_eq!(available.len(), 5);
    assert!(!available.contains(&"Monday"));
    assert!(!available.contains(&"Friday"));
}

#[test]
fn test_push_pull_legs_offer_set_follows_day_position() {
    let mut editor = RoutineEditor::new();
    editor.set_routine_type(RoutineType::PushPullLegs);
    editor.add_day(Day::new("d1".to_string(), "Monday".to_string()));
    editor.add_day(Day::new("d2".to_string(), "Wednesday".to_string()));

    let push = available_muscle_groups(editor.routine(), "d1");
    assert!(push.contains(&"Chest"));
    assert!(!push.contains(&"Back"));

    let pull = available_muscle_groups(editor.routine(), "d2");
    assert!(pull.contains(&"Back"));
    assert!(!pull.contains(&"Chest"));

    // Groups already on the day disappear from the offer set.
    editor.add_muscle_group("d1", "Chest");
    assert!(!available_muscle_groups(editor.routine(), "d1").contains(&"Chest"));
}
