//! Page metrics, column layout and text measurement for the PDF renderer.
//!
//! All math here is synchronous and I/O free; the renderer in `document`
//! only consumes the numbers. Text is measured with a fixed average glyph
//! width for the built-in Helvetica faces, which errs slightly wide; the
//! pagination rules only require the wrap to be deterministic.

/// A4 page width in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// A4 page height in millimeters.
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Left/right content margin.
pub const MARGIN_X_MM: f64 = 14.0;

/// First baseline offset from the top of a page.
pub const MARGIN_TOP_MM: f64 = 20.0;

/// Nothing is drawn below this distance from the bottom edge.
pub const MARGIN_BOTTOM_MM: f64 = 20.0;

/// Base table line height.
pub const LINE_HEIGHT_MM: f64 = 6.0;

/// Vertical gap after a muscle-group table.
pub const GROUP_GAP_MM: f64 = 6.0;

/// Vertical gap after a day section.
pub const DAY_GAP_MM: f64 = 4.0;

/// Title font size (pt).
pub const TITLE_SIZE: f64 = 18.0;

/// Day header font size (pt).
pub const DAY_SIZE: f64 = 14.0;

/// Muscle-group header font size (pt).
pub const GROUP_SIZE: f64 = 12.0;

/// Column header font size (pt).
pub const HEADER_SIZE: f64 = 11.0;

/// Table body font size (pt).
pub const BODY_SIZE: f64 = 10.0;

/// Day header row height.
pub const DAY_HEADER_MM: f64 = 8.0;

/// Muscle-group header row height.
pub const GROUP_HEADER_MM: f64 = 7.0;

/// Column header row height (including the underline).
pub const TABLE_HEADER_MM: f64 = 6.0;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_EM: f64 = 0.5;

/// Horizontal padding kept clear inside every column.
const CELL_GUTTER_MM: f64 = 2.0;

/// Estimated rendered width of a string at the given font size.
pub fn text_width_mm(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVG_GLYPH_EM * PT_TO_MM
}

/// Greedy word wrap into lines that fit `max_width_mm` at `font_size`.
///
/// Words longer than a full line are hard-split. Empty input yields no
/// lines; callers treat that as a single blank line.
pub fn wrap_text(text: &str, max_width_mm: f64, font_size: f64) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, max_width_mm, font_size) {
            let candidate = if current.is_empty() {
                piece.clone()
            } else {
                format!("{} {}", current, piece)
            };

            if text_width_mm(&candidate, font_size) <= max_width_mm || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, piece));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncate a string so it fits one cell, appending an ellipsis when cut.
pub fn clip_text(text: &str, max_width_mm: f64, font_size: f64) -> String {
    if text_width_mm(text, font_size) <= max_width_mm {
        return text.to_string();
    }

    let mut clipped = text.to_string();
    while !clipped.is_empty() {
        clipped.pop();
        let candidate = format!("{}…", clipped);
        if text_width_mm(&candidate, font_size) <= max_width_mm {
            return candidate;
        }
    }

    String::new()
}

fn split_long_word(word: &str, max_width_mm: f64, font_size: f64) -> Vec<String> {
    if text_width_mm(word, font_size) <= max_width_mm {
        return vec![word.to_string()];
    }

    let glyph_mm = font_size * AVG_GLYPH_EM * PT_TO_MM;
    let per_line = ((max_width_mm / glyph_mm).floor() as usize).max(1);

    word.chars()
        .collect::<Vec<_>>()
        .chunks(per_line)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// One table column: absolute x position and width, both in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f64,
    pub width: f64,
}

impl Column {
    /// Width available for text inside the column.
    pub fn text_width(&self) -> f64 {
        (self.width - CELL_GUTTER_MM).max(1.0)
    }
}

/// Column set for the standard per-group table:
/// Exercise, Series, Reps, Weight, Details.
#[derive(Debug, Clone, Copy)]
pub struct StandardColumns {
    pub exercise: Column,
    pub series: Column,
    pub reps: Column,
    pub weight: Column,
    pub details: Column,
}

/// Column set for the compact full-body table:
/// Muscle Group, Exercise, Series, Reps, Weight.
#[derive(Debug, Clone, Copy)]
pub struct CompactColumns {
    pub muscle_group: Column,
    pub exercise: Column,
    pub series: Column,
    pub reps: Column,
    pub weight: Column,
}

/// Total width available for table content.
pub fn content_width_mm() -> f64 {
    PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM
}

const SERIES_WIDTH_MM: f64 = 16.0;
const REPS_WIDTH_MM: f64 = 30.0;
const WEIGHT_WIDTH_MM: f64 = 30.0;

impl StandardColumns {
    /// Compute the standard layout once from the fixed content width: the
    /// three utility columns are fixed, the remainder splits evenly between
    /// Exercise and Details.
    pub fn compute() -> Self {
        let flex = (content_width_mm() - SERIES_WIDTH_MM - REPS_WIDTH_MM - WEIGHT_WIDTH_MM) / 2.0;

        let exercise = Column {
            x: MARGIN_X_MM,
            width: flex,
        };
        let series = Column {
            x: exercise.x + exercise.width,
            width: SERIES_WIDTH_MM,
        };
        let reps = Column {
            x: series.x + series.width,
            width: REPS_WIDTH_MM,
        };
        let weight = Column {
            x: reps.x + reps.width,
            width: WEIGHT_WIDTH_MM,
        };
        let details = Column {
            x: weight.x + weight.width,
            width: flex,
        };

        Self {
            exercise,
            series,
            reps,
            weight,
            details,
        }
    }
}

impl CompactColumns {
    /// Compute the compact layout: fixed utility columns, the remainder
    /// splits evenly between Muscle Group and Exercise.
    pub fn compute() -> Self {
        let flex = (content_width_mm() - SERIES_WIDTH_MM - REPS_WIDTH_MM - WEIGHT_WIDTH_MM) / 2.0;

        let muscle_group = Column {
            x: MARGIN_X_MM,
            width: flex,
        };
        let exercise = Column {
            x: muscle_group.x + muscle_group.width,
            width: flex,
        };
        let series = Column {
            x: exercise.x + exercise.width,
            width: SERIES_WIDTH_MM,
        };
        let reps = Column {
            x: series.x + series.width,
            width: REPS_WIDTH_MM,
        };
        let weight = Column {
            x: reps.x + reps.width,
            width: WEIGHT_WIDTH_MM,
        };

        Self {
            muscle_group,
            exercise,
            series,
            reps,
            weight,
        }
    }
}

/// Height of one table row given its wrapped detail line count.
pub fn row_height_mm(detail_lines: usize) -> f64 {
    detail_lines.max(1) as f64 * LINE_HEIGHT_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_span_content_width() {
        let cols = StandardColumns::compute();
        let right_edge = cols.details.x + cols.details.width;
        assert!((right_edge - (PAGE_WIDTH_MM - MARGIN_X_MM)).abs() < 1e-9);
        assert!((cols.exercise.width - cols.details.width).abs() < 1e-9);
    }

    #[test]
    fn test_compact_columns_span_content_width() {
        let cols = CompactColumns::compute();
        let right_edge = cols.weight.x + cols.weight.width;
        assert!((right_edge - (PAGE_WIDTH_MM - MARGIN_X_MM)).abs() < 1e-9);
        assert!((cols.muscle_group.width - cols.exercise.width).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let lines = wrap_text("light warm-up", 53.0, BODY_SIZE);
        assert_eq!(lines, vec!["light warm-up"]);
    }

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(wrap_text("", 53.0, BODY_SIZE).is_empty());
        assert!(wrap_text("   ", 53.0, BODY_SIZE).is_empty());
    }

    #[test]
    fn test_wrap_splits_at_word_boundaries() {
        let text = "slow eccentric, pause two seconds at the bottom, full lockout";
        let lines = wrap_text(text, 53.0, BODY_SIZE);
        assert!(lines.len() > 1);
        // No line exceeds the column width and nothing is lost.
        for line in &lines {
            assert!(text_width_mm(line, BODY_SIZE) <= 53.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let text = "tempo 3-1-1, last set to failure, spotter required";
        assert_eq!(
            wrap_text(text, 53.0, BODY_SIZE),
            wrap_text(text, 53.0, BODY_SIZE)
        );
    }

    #[test]
    fn test_wrap_hard_splits_oversized_word() {
        let word = "a".repeat(120);
        let lines = wrap_text(&word, 20.0, BODY_SIZE);
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn test_row_height_scales_with_lines() {
        assert_eq!(row_height_mm(0), LINE_HEIGHT_MM);
        assert_eq!(row_height_mm(1), LINE_HEIGHT_MM);
        assert_eq!(row_height_mm(3), 3.0 * LINE_HEIGHT_MM);
    }

    #[test]
    fn test_clip_text_adds_ellipsis() {
        let clipped = clip_text("an exercise name that cannot possibly fit", 20.0, BODY_SIZE);
        assert!(clipped.ends_with('…'));
        assert!(text_width_mm(&clipped, BODY_SIZE) <= 20.0);
    }

    #[test]
    fn test_clip_text_keeps_short_text() {
        assert_eq!(clip_text("Bench Press", 53.0, BODY_SIZE), "Bench Press");
    }
}
