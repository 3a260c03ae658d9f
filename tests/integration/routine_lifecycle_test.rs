//! Integration test for the full routine lifecycle: edit, persist, reload,
//! edit again, and render.

use forza::export::RoutineDocument;
use forza::routine::{Day, RoutineEditor};
use forza::storage::{Database, RoutineStore, Student, StudentStore};

#[test]
fn test_create_edit_and_reload_round_trip() {
    let db = Database::open_in_memory().unwrap();
    let students = StudentStore::new(db.connection());
    let routines = RoutineStore::new(db.connection());

    let student = Student::new("t1", "Ana Torres");
    students.insert(&student).unwrap();

    // Create flow: build a routine in the editor and persist it.
    let mut editor = RoutineEditor::new();
    editor.set_student(&student.id);
    editor.add_day(Day::new("d1".to_string(), "Monday".to_string()));
    editor.add_muscle_group("d1", "Chest");
    let group_id = editor.routine().days[0].muscle_groups[0].id.clone();
    editor.add_exercise("d1", &group_id);
    let ex_id = editor.routine().days[0].muscle_groups[0].exercises[0]
        .id
        .clone();
    editor.set_exercise_name("d1", &group_id, &ex_id, "Bench Press");
    editor.set_weight("d1", &group_id, &ex_id, 0, 60.0);

    let record = routines
        .insert("t1", &student.id, editor.routine())
        .unwrap();

    // Post-save cleanup.
    editor.reset();
    assert!(editor.routine().days.is_empty());

    // Edit flow: hydrate from storage, change something, persist again.
    let loaded = routines.get(&record.id).unwrap().unwrap();
    editor.load(loaded.routine.clone());
    assert_eq!(
        editor.routine().days[0].muscle_groups[0].exercises[0].name,
        "Bench Press"
    );

    editor.add_set("d1", &group_id, &ex_id);
    routines.update(&record.id, editor.routine()).unwrap();

    let reloaded = routines.get(&record.id).unwrap().unwrap();
    let ex = &reloaded.routine.days[0].muscle_groups[0].exercises[0];
    assert_eq!(ex.series, 2);
    assert_eq!(ex.reps, vec![10, 10]);
    assert_eq!(ex.weight, vec![60.0, 0.0]);
}

#[tokio::test]
async fn test_render_resolves_student_name_from_store() {
    let db = Database::open_in_memory().unwrap();
    let students = StudentStore::new(db.connection());

    let student = Student::new("t1", "Luis Perez");
    students.insert(&student).unwrap();

    let mut editor = RoutineEditor::new();
    editor.set_student(&student.id);
    editor.add_day(Day::new("d1".to_string(), "Monday".to_string()));
    editor.add_muscle_group("d1", "Back");
    let group_id = editor.routine().days[0].muscle_groups[0].id.clone();
    editor.add_exercise("d1", &group_id);

    let document = RoutineDocument::new(editor.routine())
        .with_students(&students)
        .generate()
        .await
        .unwrap();

    assert!(document.bytes.starts_with(b"%PDF"));
    assert_eq!(document.filename, "routine_Luis_Perez.pdf");
}
