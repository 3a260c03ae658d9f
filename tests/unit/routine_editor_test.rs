//! Unit tests for the routine editor's end-to-end editing scenarios,
//! driven through the public API only.

use forza::routine::{Day, RoutineEditor};

/// Walk the canonical editing flow: add a day, a muscle group, an exercise,
/// grow and shrink its sets.
#[test]
fn test_editing_scenario_from_empty_routine() {
    let mut editor = RoutineEditor::new();

    // An empty routine gains one Monday with no groups.
    editor.add_day(Day::new("d1".to_string(), "Monday".to_string()));
    assert_eq!(editor.routine().days.len(), 1);
    assert_eq!(editor.routine().days[0].name, "Monday");
    assert!(editor.routine().days[0].muscle_groups.is_empty());

    // Adding a chest group and an exercise seeds the defaults.
    editor.add_muscle_group("d1", "Chest");
    let group_id = editor.routine().days[0].muscle_groups[0].id.clone();
    editor.add_exercise("d1", &group_id);

    let ex = &editor.routine().days[0].muscle_groups[0].exercises[0];
    let ex_id = ex.id.clone();
    assert_eq!(ex.series, 1);
    assert_eq!(ex.reps, vec![10]);
    assert_eq!(ex.weight, vec![0.0]);
    assert_eq!(ex.name, "");

    // Three more sets keep everything parallel.
    for _ in 0..3 {
        editor.add_set("d1", &group_id, &ex_id);
    }
    let ex = &editor.routine().days[0].muscle_groups[0].exercises[0];
    assert_eq!(ex.series, 4);
    assert_eq!(ex.reps, vec![10, 10, 10, 10]);
    assert_eq!(ex.weight, vec![0.0, 0.0, 0.0, 0.0]);

    // Shrinking back to two sets keeps the leading values.
    editor.set_reps("d1", &group_id, &ex_id, 0, 12);
    editor.set_reps("d1", &group_id, &ex_id, 1, 8);
    editor.set_series("d1", &group_id, &ex_id, 2);

    let ex = &editor.routine().days[0].muscle_groups[0].exercises[0];
    assert_eq!(ex.series, 2);
    assert_eq!(ex.reps, vec![12, 8]);
    assert_eq!(ex.weight.len(), 2);
}

#[test]
fn test_generated_ids_are_unique_among_siblings() {
    let mut editor = RoutineEditor::new();
    editor.add_day(editor.make_day("Monday"));
    let day_id = editor.routine().days[0].id.clone();

    editor.add_muscle_group(&day_id, "Chest");
    editor.add_muscle_group(&day_id, "Back");
    let groups = &editor.routine().days[0].muscle_groups;
    assert_ne!(groups[0].id, groups[1].id);

    let group_id = groups[0].id.clone();
    editor.add_exercise(&day_id, &group_id);
    editor.add_exercise(&day_id, &group_id);
    let exercises = &editor.routine().days[0].muscle_groups[0].exercises;
    assert_ne!(exercises[0].id, exercises[1].id);
}

#[test]
fn test_reset_after_editing_returns_to_skeleton() {
    let mut editor = RoutineEditor::new();
    editor.set_name("Ana");
    editor.add_day(editor.make_day("Tuesday"));
    editor.reset();

    assert_eq!(editor.routine().id, "");
    assert_eq!(editor.routine().name, "");
    assert!(editor.routine().days.is_empty());
}
