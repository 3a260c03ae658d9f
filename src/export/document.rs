//! Routine document renderer.
//!
//! Rendering runs in two phases: a pure planning pass turns the routine
//! into absolute draw commands (all pagination decisions happen here), and
//! an execution pass replays the commands into a PDF. Only the watermark
//! fetch and the final artifact assembly suspend.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, Point};
use thiserror::Error;

use crate::export::layout::{
    clip_text, row_height_mm, wrap_text, CompactColumns, StandardColumns, BODY_SIZE, DAY_GAP_MM,
    DAY_HEADER_MM, DAY_SIZE, GROUP_GAP_MM, GROUP_HEADER_MM, GROUP_SIZE, HEADER_SIZE,
    LINE_HEIGHT_MM, MARGIN_BOTTOM_MM, MARGIN_TOP_MM, MARGIN_X_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    TABLE_HEADER_MM, TITLE_SIZE,
};
use crate::export::watermark::{self, WatermarkTile};
use crate::routine::{Exercise, Routine, RoutineType};

/// Label used when no student name can be resolved.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// Label used for exercises the trainer never named.
const UNNAMED_EXERCISE: &str = "(unnamed)";

/// Baseline of the document title.
const TITLE_Y_MM: f64 = 18.0;

/// First content baseline on the title page.
const CONTENT_START_MM: f64 = 30.0;

/// Resolves a student id to a display name for the document title.
pub trait StudentLookup {
    /// Returns the student's name, or `None` when the id is unknown.
    fn student_name(&self, student_id: &str) -> anyhow::Result<Option<String>>;
}

/// Errors fatal to a document generation attempt.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// A finished document ready for download.
pub struct RenderedDocument {
    /// The PDF bytes
    pub bytes: Vec<u8>,
    /// Download filename derived from the resolved student name
    pub filename: String,
}

/// Builder for one document generation attempt.
pub struct RoutineDocument<'a> {
    routine: &'a Routine,
    students: Option<&'a dyn StudentLookup>,
    watermark_source: Option<String>,
}

impl<'a> RoutineDocument<'a> {
    /// Start a generation attempt for the given routine.
    pub fn new(routine: &'a Routine) -> Self {
        Self {
            routine,
            students: None,
            watermark_source: None,
        }
    }

    /// Attach a student lookup for title resolution.
    pub fn with_students(mut self, students: &'a dyn StudentLookup) -> Self {
        self.students = Some(students);
        self
    }

    /// Attach a watermark source (HTTP URL or file path).
    pub fn with_watermark(mut self, source: impl Into<String>) -> Self {
        self.watermark_source = Some(source.into());
        self
    }

    /// Produce the document.
    ///
    /// Watermark and name-resolution failures degrade gracefully; only
    /// content rendering errors surface to the caller, and those produce no
    /// artifact at all.
    pub async fn generate(self) -> Result<RenderedDocument, ExportError> {
        let student_name = resolve_student_name(self.routine, self.students);

        let watermark = match &self.watermark_source {
            Some(source) => match watermark::load(source).await {
                Ok(tile) => Some(tile),
                Err(e) => {
                    tracing::warn!(error = %e, "Watermark unavailable, rendering without it");
                    None
                }
            },
            None => None,
        };

        let plan = plan_document(self.routine, &student_name);
        let bytes = execute_plan(&plan, watermark.as_ref())?;

        tracing::info!(
            pages = plan.page_count(),
            student = %student_name,
            "Routine document generated"
        );

        Ok(RenderedDocument {
            bytes,
            filename: document_filename(&student_name),
        })
    }
}

/// Resolve the display name for the title: the routine's own name, else the
/// lookup collaborator, else a placeholder. Never fails the render.
fn resolve_student_name(routine: &Routine, students: Option<&dyn StudentLookup>) -> String {
    if !routine.name.trim().is_empty() {
        return routine.name.trim().to_string();
    }

    if let (Some(student_id), Some(lookup)) = (&routine.student_id, students) {
        match lookup.student_name(student_id) {
            Ok(Some(name)) => return name,
            Ok(None) => {
                tracing::warn!(student_id = %student_id, "Student not found, using placeholder")
            }
            Err(e) => tracing::warn!(error = %e, "Student lookup failed, using placeholder"),
        }
    }

    UNKNOWN_STUDENT.to_string()
}

/// Download filename: whitespace runs in the resolved name collapse to `_`.
pub fn document_filename(student_name: &str) -> String {
    let normalized = student_name.split_whitespace().collect::<Vec<_>>().join("_");
    if normalized.is_empty() {
        "routine.pdf".to_string()
    } else {
        format!("routine_{}.pdf", normalized)
    }
}

/// One drawing instruction. Positions are top-down millimeters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCmd {
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        content: String,
    },
    Rule {
        y: f64,
    },
    PageBreak,
}

/// The fully paginated document plan.
pub(crate) struct DocumentPlan {
    pub commands: Vec<DrawCmd>,
}

impl DocumentPlan {
    pub fn page_count(&self) -> usize {
        1 + self
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::PageBreak))
            .count()
    }
}

struct Planner {
    commands: Vec<DrawCmd>,
    y: f64,
}

impl Planner {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
            y: MARGIN_TOP_MM,
        }
    }

    /// Break the page unless `needed` more millimeters fit above the bottom
    /// margin. Callers pass the height of the whole indivisible unit, so a
    /// header is never left alone at a page bottom.
    fn ensure_room(&mut self, needed: f64) {
        if self.y + needed > PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM {
            self.commands.push(DrawCmd::PageBreak);
            self.y = MARGIN_TOP_MM;
        }
    }

    fn text(&mut self, x: f64, y: f64, size: f64, bold: bool, content: impl Into<String>) {
        self.commands.push(DrawCmd::Text {
            x,
            y,
            size,
            bold,
            content: content.into(),
        });
    }

    fn rule(&mut self, y: f64) {
        self.commands.push(DrawCmd::Rule { y });
    }
}

/// Lay out the whole document: title, then every day in storage order.
pub(crate) fn plan_document(routine: &Routine, student_name: &str) -> DocumentPlan {
    let mut planner = Planner::new();

    planner.text(
        MARGIN_X_MM,
        TITLE_Y_MM,
        TITLE_SIZE,
        false,
        format!("Training Routine - {}", student_name),
    );
    planner.y = CONTENT_START_MM;

    match routine.routine_type {
        RoutineType::FullBody => plan_compact(&mut planner, routine),
        _ => plan_standard(&mut planner, routine),
    }

    DocumentPlan {
        commands: planner.commands,
    }
}

fn exercise_name(ex: &Exercise) -> &str {
    if ex.name.trim().is_empty() {
        UNNAMED_EXERCISE
    } else {
        &ex.name
    }
}

fn join_reps(ex: &Exercise) -> String {
    if ex.reps.is_empty() {
        "-".to_string()
    } else {
        ex.reps
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn format_weight(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{}", kg as i64)
    } else {
        format!("{}", kg)
    }
}

fn join_weights(ex: &Exercise) -> String {
    if ex.weight.is_empty() {
        "-".to_string()
    } else {
        ex.weight
            .iter()
            .map(|w| format_weight(*w))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Height of a group's first table row, for keep-with-header checks.
fn first_row_height(exercises: &[Exercise], details_width: f64) -> f64 {
    exercises
        .first()
        .map(|ex| row_height_mm(wrap_text(&ex.details, details_width, BODY_SIZE).len()))
        .unwrap_or(LINE_HEIGHT_MM)
}

/// Standard layout: one table per muscle group with a details column.
fn plan_standard(planner: &mut Planner, routine: &Routine) {
    let cols = StandardColumns::compute();

    for (day_index, day) in routine.days.iter().enumerate() {
        let mut day_unit = DAY_HEADER_MM;
        if let Some(group) = day.muscle_groups.first() {
            day_unit += GROUP_HEADER_MM
                + TABLE_HEADER_MM
                + first_row_height(&group.exercises, cols.details.text_width());
        }
        planner.ensure_room(day_unit);

        planner.text(
            MARGIN_X_MM,
            planner.y,
            DAY_SIZE,
            false,
            format!("Day {}: {}", day_index + 1, day.name),
        );
        planner.y += DAY_HEADER_MM;

        for group in &day.muscle_groups {
            planner.ensure_room(
                GROUP_HEADER_MM
                    + TABLE_HEADER_MM
                    + first_row_height(&group.exercises, cols.details.text_width()),
            );

            planner.text(
                MARGIN_X_MM + 2.0,
                planner.y,
                GROUP_SIZE,
                false,
                format!("Muscle Group: {}", group.name),
            );
            planner.y += GROUP_HEADER_MM;

            let header_y = planner.y;
            planner.text(cols.exercise.x, header_y, HEADER_SIZE, true, "EXERCISE");
            planner.text(cols.series.x, header_y, HEADER_SIZE, true, "SERIES");
            planner.text(cols.reps.x, header_y, HEADER_SIZE, true, "REPS");
            planner.text(cols.weight.x, header_y, HEADER_SIZE, true, "WEIGHT");
            planner.text(cols.details.x, header_y, HEADER_SIZE, true, "DETAILS");
            planner.rule(header_y + 1.5);
            planner.y += TABLE_HEADER_MM;

            for ex in &group.exercises {
                let detail_lines = wrap_text(&ex.details, cols.details.text_width(), BODY_SIZE);
                let row_h = row_height_mm(detail_lines.len());
                planner.ensure_room(row_h);

                let row_y = planner.y;
                planner.text(
                    cols.exercise.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(exercise_name(ex), cols.exercise.text_width(), BODY_SIZE),
                );
                planner.text(cols.series.x, row_y, BODY_SIZE, false, ex.series.to_string());
                planner.text(
                    cols.reps.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(&join_reps(ex), cols.reps.text_width(), BODY_SIZE),
                );
                planner.text(
                    cols.weight.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(&join_weights(ex), cols.weight.text_width(), BODY_SIZE),
                );

                if detail_lines.is_empty() {
                    planner.text(cols.details.x, row_y, BODY_SIZE, false, "-");
                } else {
                    for (line_index, line) in detail_lines.iter().enumerate() {
                        planner.text(
                            cols.details.x,
                            row_y + line_index as f64 * LINE_HEIGHT_MM,
                            BODY_SIZE,
                            false,
                            line.clone(),
                        );
                    }
                }

                planner.y += row_h;
            }

            planner.y += GROUP_GAP_MM;
        }

        planner.y += DAY_GAP_MM;
    }
}

/// Compact layout: one merged table per day, no details column. The muscle
/// group name prints on the first row of each group only.
fn plan_compact(planner: &mut Planner, routine: &Routine) {
    let cols = CompactColumns::compute();

    for (day_index, day) in routine.days.iter().enumerate() {
        let first_rows = if day.muscle_groups.is_empty() {
            0.0
        } else {
            LINE_HEIGHT_MM
        };
        planner.ensure_room(DAY_HEADER_MM + TABLE_HEADER_MM + first_rows);

        planner.text(
            MARGIN_X_MM,
            planner.y,
            DAY_SIZE,
            false,
            format!("Day {}: {}", day_index + 1, day.name),
        );
        planner.y += DAY_HEADER_MM;

        let header_y = planner.y;
        planner.text(cols.muscle_group.x, header_y, HEADER_SIZE, true, "MUSCLE GROUP");
        planner.text(cols.exercise.x, header_y, HEADER_SIZE, true, "EXERCISE");
        planner.text(cols.series.x, header_y, HEADER_SIZE, true, "SERIES");
        planner.text(cols.reps.x, header_y, HEADER_SIZE, true, "REPS");
        planner.text(cols.weight.x, header_y, HEADER_SIZE, true, "WEIGHT");
        planner.rule(header_y + 1.5);
        planner.y += TABLE_HEADER_MM;

        for group in &day.muscle_groups {
            for (ex_index, ex) in group.exercises.iter().enumerate() {
                planner.ensure_room(LINE_HEIGHT_MM);

                let row_y = planner.y;
                if ex_index == 0 {
                    planner.text(
                        cols.muscle_group.x,
                        row_y,
                        BODY_SIZE,
                        false,
                        clip_text(&group.name, cols.muscle_group.text_width(), BODY_SIZE),
                    );
                }
                planner.text(
                    cols.exercise.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(exercise_name(ex), cols.exercise.text_width(), BODY_SIZE),
                );
                planner.text(cols.series.x, row_y, BODY_SIZE, false, ex.series.to_string());
                planner.text(
                    cols.reps.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(&join_reps(ex), cols.reps.text_width(), BODY_SIZE),
                );
                planner.text(
                    cols.weight.x,
                    row_y,
                    BODY_SIZE,
                    false,
                    clip_text(&join_weights(ex), cols.weight.text_width(), BODY_SIZE),
                );

                planner.y += LINE_HEIGHT_MM;
            }
        }

        planner.y += DAY_GAP_MM;
    }
}

/// Replay a plan into a PDF, tiling the watermark under every page.
fn execute_plan(
    plan: &DocumentPlan,
    watermark: Option<&WatermarkTile>,
) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, base_layer) = PdfDocument::new(
        "Training Routine",
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Watermark",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    if let Some(tile) = watermark {
        let layer = doc.get_page(first_page).get_layer(base_layer);
        tile.tile_page(&layer, PAGE_WIDTH_MM, PAGE_HEIGHT_MM);
    }
    let mut content = doc.get_page(first_page).add_layer("Content");

    for cmd in &plan.commands {
        match cmd {
            DrawCmd::PageBreak => {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Watermark");
                if let Some(tile) = watermark {
                    let layer = doc.get_page(page).get_layer(layer_index);
                    tile.tile_page(&layer, PAGE_WIDTH_MM, PAGE_HEIGHT_MM);
                }
                content = doc.get_page(page).add_layer("Content");
            }
            DrawCmd::Text {
                x,
                y,
                size,
                bold: is_bold,
                content: text,
            } => {
                let font: &IndirectFontRef = if *is_bold { &bold } else { &regular };
                content.use_text(text.clone(), *size as f32, Mm(*x as f32), Mm((PAGE_HEIGHT_MM - y) as f32), font);
            }
            DrawCmd::Rule { y } => {
                let line = Line {
                    points: vec![
                        (
                            Point::new(Mm(MARGIN_X_MM as f32), Mm((PAGE_HEIGHT_MM - y) as f32)),
                            false,
                        ),
                        (
                            Point::new(Mm((PAGE_WIDTH_MM - MARGIN_X_MM) as f32), Mm((PAGE_HEIGHT_MM - y) as f32)),
                            false,
                        ),
                    ],
                    is_closed: false,
                };
                content.set_outline_thickness(0.2);
                content.add_line(line);
            }
        }
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}
