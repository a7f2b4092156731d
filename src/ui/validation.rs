// src/ui/validation.rs
//
// Soft per-cell validation: a cell whose text cannot be read as its column's
// kind gets a visual hint, nothing more. Submission is never blocked.
use chrono::{NaiveDate, NaiveDateTime};

use crate::forms::definitions::ColumnKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Valid,
    Invalid,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

pub fn validate_cell_text(kind: ColumnKind, text: &str) -> ValidationState {
    let trimmed = text.trim();
    // Absent is empty, never an error.
    if trimmed.is_empty() {
        return ValidationState::Valid;
    }
    match kind {
        ColumnKind::Number => {
            if trimmed.parse::<f64>().is_ok() {
                ValidationState::Valid
            } else {
                ValidationState::Invalid
            }
        }
        ColumnKind::Datetime => {
            let parses = DATETIME_FORMATS
                .iter()
                .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
                || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok();
            if parses {
                ValidationState::Valid
            } else {
                ValidationState::Invalid
            }
        }
        _ => ValidationState::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_always_valid() {
        for kind in ColumnKind::ALL {
            assert_eq!(validate_cell_text(kind, "  "), ValidationState::Valid);
        }
    }

    #[test]
    fn number_cells_accept_floats_only() {
        assert_eq!(
            validate_cell_text(ColumnKind::Number, "123.5"),
            ValidationState::Valid
        );
        assert_eq!(
            validate_cell_text(ColumnKind::Number, "-4"),
            ValidationState::Valid
        );
        assert_eq!(
            validate_cell_text(ColumnKind::Number, "12a"),
            ValidationState::Invalid
        );
    }

    #[test]
    fn datetime_cells_accept_common_formats() {
        for ok in ["2026-03-01T09:30", "2026-03-01 09:30:00", "2026-03-01"] {
            assert_eq!(
                validate_cell_text(ColumnKind::Datetime, ok),
                ValidationState::Valid,
                "{}",
                ok
            );
        }
        assert_eq!(
            validate_cell_text(ColumnKind::Datetime, "yesterday"),
            ValidationState::Invalid
        );
    }

    #[test]
    fn free_text_is_never_flagged() {
        assert_eq!(
            validate_cell_text(ColumnKind::Text, "anything at all"),
            ValidationState::Valid
        );
    }
}
