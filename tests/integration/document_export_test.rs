//! Integration tests for PDF generation with and without a watermark.

use forza::export::RoutineDocument;
use forza::routine::{Day, Exercise, MuscleGroup, Routine, RoutineType};
use image::{DynamicImage, Rgba, RgbaImage};
use std::io::Cursor;

fn routine_with_exercises(names: &[&str]) -> Routine {
    let mut routine = Routine::empty();
    routine.name = "Ana Torres".to_string();

    let mut day = Day::new("d1".to_string(), "Monday".to_string());
    let mut group = MuscleGroup::new("m1".to_string(), "Chest".to_string());
    for (i, name) in names.iter().enumerate() {
        let mut ex = Exercise::new(format!("e{i}"));
        ex.name = name.to_string();
        group.exercises.push(ex);
    }
    day.muscle_groups.push(group);
    routine.days.push(day);

    routine
}

fn avatar_png() -> Vec<u8> {
    let mut img = RgbaImage::new(16, 16);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255]);
    }
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageOutputFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[tokio::test]
async fn test_generate_with_file_watermark() {
    let dir = tempfile::tempdir().unwrap();
    let avatar_path = dir.path().join("avatar.png");
    std::fs::write(&avatar_path, avatar_png()).unwrap();

    let routine = routine_with_exercises(&["Bench Press", "Chest Fly"]);
    let document = RoutineDocument::new(&routine)
        .with_watermark(avatar_path.to_string_lossy())
        .generate()
        .await
        .unwrap();

    assert!(document.bytes.starts_with(b"%PDF"));
    // The watermarked document carries the embedded tile images.
    let plain = RoutineDocument::new(&routine).generate().await.unwrap();
    assert!(document.bytes.len() > plain.bytes.len());
}

#[tokio::test]
async fn test_generate_without_reachable_watermark_still_succeeds() {
    let routine = routine_with_exercises(&["Bench Press"]);

    // Nothing listens on this port; the fetch fails and is swallowed.
    let document = RoutineDocument::new(&routine)
        .with_watermark("http://127.0.0.1:9/avatar.png")
        .generate()
        .await
        .unwrap();

    assert!(document.bytes.starts_with(b"%PDF"));
    assert_eq!(document.filename, "routine_Ana_Torres.pdf");
}

#[tokio::test]
async fn test_generate_with_corrupt_watermark_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let avatar_path = dir.path().join("avatar.png");
    std::fs::write(&avatar_path, b"definitely not a png").unwrap();

    let routine = routine_with_exercises(&["Bench Press"]);
    let document = RoutineDocument::new(&routine)
        .with_watermark(avatar_path.to_string_lossy())
        .generate()
        .await
        .unwrap();

    assert!(document.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_full_body_routine_renders_compact_layout() {
    let mut routine = routine_with_exercises(&["Bench Press", "Row", "Squat"]);
    routine.routine_type = RoutineType::FullBody;

    let document = RoutineDocument::new(&routine).generate().await.unwrap();
    assert!(document.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_long_routine_spans_multiple_pages() {
    let names: Vec<String> = (0..80).map(|i| format!("Exercise {i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let routine = routine_with_exercises(&name_refs);

    let document = RoutineDocument::new(&routine).generate().await.unwrap();
    assert!(document.bytes.starts_with(b"%PDF"));
    // Two pages at minimum means two page objects in the PDF.
    let body = String::from_utf8_lossy(&document.bytes);
    assert!(body.contains("/Type /Pages") || body.contains("/Type/Pages"));
}
