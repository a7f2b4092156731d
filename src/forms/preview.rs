// src/forms/preview.rs
//
// Synthetic sample content for the designer's read-only preview grid. The
// three rows are derived deterministically from the column kind and the row
// index so the preview is stable while editing.
use chrono::{Duration, NaiveDateTime};

use super::definitions::{ColumnDefinition, ColumnKind};

/// Number of synthetic rows shown in the preview.
pub const PREVIEW_ROWS: usize = 3;

const TEXT_SAMPLES: [&str; PREVIEW_ROWS] = ["Sample text", "Test data", "Click to fill in"];
const TEXTAREA_SAMPLES: [&str; PREVIEW_ROWS] = [
    "A longer multi-line example...",
    "More content can go here",
    "",
];

/// Sample cell text for non-boolean kinds. `base` anchors the datetime
/// column so successive rows advance one day at a time.
pub fn sample_cell_text(column: &ColumnDefinition, row: usize, base: NaiveDateTime) -> String {
    let row = row % PREVIEW_ROWS;
    match column.kind {
        ColumnKind::Text => TEXT_SAMPLES[row].to_string(),
        ColumnKind::Number => (123 + row as i64).to_string(),
        ColumnKind::Datetime => (base + Duration::days(row as i64))
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        ColumnKind::Select => column
            .options
            .as_ref()
            .filter(|opts| !opts.is_empty())
            .map(|opts| opts[row % opts.len()].clone())
            .unwrap_or_default(),
        ColumnKind::Textarea => TEXTAREA_SAMPLES[row].to_string(),
        ColumnKind::Checkbox => String::new(),
        ColumnKind::Image => "[image]".to_string(),
        ColumnKind::File => "[upload file]".to_string(),
    }
}

/// Sample checkbox state: only the first preview row is checked.
pub fn sample_cell_flag(row: usize) -> bool {
    row % PREVIEW_ROWS == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn select_cycles_through_options() {
        let mut column = ColumnDefinition::new("Status".to_string(), ColumnKind::Select);
        column.options = Some(vec!["OK".to_string(), "FAIL".to_string()]);
        assert_eq!(sample_cell_text(&column, 0, base()), "OK");
        assert_eq!(sample_cell_text(&column, 1, base()), "FAIL");
        assert_eq!(sample_cell_text(&column, 2, base()), "OK");
    }

    #[test]
    fn datetime_advances_by_row() {
        let column = ColumnDefinition::new("When".to_string(), ColumnKind::Datetime);
        assert_eq!(sample_cell_text(&column, 0, base()), "2026-03-01 09:30");
        assert_eq!(sample_cell_text(&column, 2, base()), "2026-03-03 09:30");
    }

    #[test]
    fn rows_are_deterministic_and_distinct_for_text() {
        let column = ColumnDefinition::new("Note".to_string(), ColumnKind::Text);
        let first = sample_cell_text(&column, 0, base());
        assert_eq!(first, sample_cell_text(&column, 0, base()));
        assert_ne!(first, sample_cell_text(&column, 1, base()));
        assert!(sample_cell_flag(0));
        assert!(!sample_cell_flag(1));
    }
}
