// src/sample_template.rs
use crate::forms::definitions::{ColumnDefinition, ColumnKind, TableStructure};

/// Template seeded on first launch so the editor never opens onto nothing:
/// a daily equipment inspection sheet exercising every column kind.
pub fn sample_inspection_template() -> (String, TableStructure) {
    let columns = vec![
        column("Device", ColumnKind::Text, Some(140), true, None),
        column(
            "Status",
            ColumnKind::Select,
            Some(100),
            true,
            Some(vec!["OK", "FAIL", "NEEDS SERVICE"]),
        ),
        column("Checked At", ColumnKind::Datetime, Some(160), false, None),
        column("Pressure (kPa)", ColumnKind::Number, Some(110), false, None),
        column("Notes", ColumnKind::Textarea, Some(220), false, None),
        column("Verified", ColumnKind::Checkbox, Some(70), false, None),
        column("Photo", ColumnKind::Image, Some(120), false, None),
        column("Report", ColumnKind::File, Some(120), false, None),
    ];
    (
        "Equipment Inspection".to_string(),
        TableStructure::new(columns),
    )
}

fn column(
    name: &str,
    kind: ColumnKind,
    width: Option<u32>,
    required: bool,
    options: Option<Vec<&str>>,
) -> ColumnDefinition {
    ColumnDefinition {
        name: name.to_string(),
        kind,
        width,
        required,
        options: options.map(|opts| opts.into_iter().map(str::to_string).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_template_is_consistent() {
        let (name, mut structure) = sample_inspection_template();
        assert_eq!(name, "Equipment Inspection");
        assert_eq!(structure.len(), 8);
        // Already satisfies the options-iff-select invariant.
        assert!(!structure.ensure_options_consistency());
    }
}
