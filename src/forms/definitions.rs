// src/forms/definitions.rs
use bevy::prelude::warn;
use serde::{
    de::{self, Deserializer},
    Deserialize, Serialize,
};
use std::fmt;

/// Default width (px) assigned to freshly added columns.
pub const DEFAULT_COLUMN_WIDTH: u32 = 120;
/// Lower bound enforced while drag-resizing a column.
pub const MIN_COLUMN_WIDTH: u32 = 50;
/// Upper bound accepted from the width input.
pub const MAX_COLUMN_WIDTH: u32 = 500;

/// Placeholder options seeded when a column becomes a select without any.
pub fn default_select_options() -> Vec<String> {
    vec!["Option 1".to_string(), "Option 2".to_string()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Datetime,
    Select,
    Textarea,
    Checkbox,
    Image,
    File,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 8] = [
        ColumnKind::Text,
        ColumnKind::Number,
        ColumnKind::Datetime,
        ColumnKind::Select,
        ColumnKind::Textarea,
        ColumnKind::Checkbox,
        ColumnKind::Image,
        ColumnKind::File,
    ];

    /// Label shown in the kind selector.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Text => "Text",
            ColumnKind::Number => "Number",
            ColumnKind::Datetime => "Date & time",
            ColumnKind::Select => "Dropdown",
            ColumnKind::Textarea => "Multi-line text",
            ColumnKind::Checkbox => "Checkbox",
            ColumnKind::Image => "Image",
            ColumnKind::File => "File",
        }
    }

    /// Checkbox cells carry a boolean; every other kind carries a string.
    pub fn is_boolean(&self) -> bool {
        matches!(self, ColumnKind::Checkbox)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Select => "select",
            ColumnKind::Textarea => "textarea",
            ColumnKind::Checkbox => "checkbox",
            ColumnKind::Image => "image",
            ColumnKind::File => "file",
        };
        write!(f, "{}", s)
    }
}

// Custom Deserialize so documents written by hand (or by older tooling with
// different casing) still load.
impl<'de> Deserialize<'de> for ColumnKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer)?;
        let as_str = match v {
            serde_json::Value::String(s) => s,
            other => {
                return Err(de::Error::custom(format!(
                    "column type must be a string, got {}",
                    other
                )))
            }
        };
        parse_column_kind(&as_str)
            .ok_or_else(|| de::Error::custom(format!("unknown column type '{}'", as_str)))
    }
}

pub fn parse_column_kind(s: &str) -> Option<ColumnKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" | "string" => Some(ColumnKind::Text),
        "number" | "numeric" | "int" | "float" => Some(ColumnKind::Number),
        "datetime" | "datetime-local" | "date" => Some(ColumnKind::Datetime),
        "select" | "dropdown" => Some(ColumnKind::Select),
        "textarea" | "multiline" => Some(ColumnKind::Textarea),
        "checkbox" | "bool" | "boolean" => Some(ColumnKind::Checkbox),
        "image" => Some(ColumnKind::Image),
        "file" => Some(ColumnKind::File),
        _ => None,
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    // Present only when kind == Select
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ColumnDefinition {
    pub fn new(name: String, kind: ColumnKind) -> Self {
        let options = if kind == ColumnKind::Select {
            Some(default_select_options())
        } else {
            None
        };
        ColumnDefinition {
            name,
            kind,
            width: Some(DEFAULT_COLUMN_WIDTH),
            required: false,
            options,
        }
    }

    /// Restores the options-iff-select invariant. Returns true if a fix was
    /// applied.
    pub fn ensure_options_consistency(&mut self) -> bool {
        match self.kind {
            ColumnKind::Select => {
                let missing = self
                    .options
                    .as_ref()
                    .map_or(true, |opts| opts.is_empty());
                if missing {
                    self.options = Some(default_select_options());
                    true
                } else {
                    false
                }
            }
            _ => {
                if self.options.is_some() {
                    self.options = None;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Ordered column schema for one check-sheet template. Column order defines
/// left-to-right grid position and the A/B/C... label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableStructure {
    pub columns: Vec<ColumnDefinition>,
}

impl TableStructure {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        TableStructure { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnDefinition> {
        self.columns.get(index)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Appends a text column named `Column{N}`, bumping N past any clashes
    /// with existing names. Returns the generated name.
    pub fn add_column(&mut self) -> String {
        let mut n = self.columns.len() + 1;
        let mut name = format!("Column{}", n);
        while self.columns.iter().any(|c| c.name == name) {
            n += 1;
            name = format!("Column{}", n);
        }
        self.columns
            .push(ColumnDefinition::new(name.clone(), ColumnKind::Text));
        name
    }

    pub fn delete_column(&mut self, index: usize) -> Result<ColumnDefinition, String> {
        if index >= self.columns.len() {
            return Err(format!(
                "Column index {} out of bounds ({} columns).",
                index,
                self.columns.len()
            ));
        }
        Ok(self.columns.remove(index))
    }

    pub fn rename_column(&mut self, index: usize, new_name: String) -> Result<(), String> {
        let duplicate = self
            .columns
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == new_name);
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| format!("Column index {} out of bounds.", index))?;
        column.name = new_name;
        if duplicate {
            warn!(
                "Column name '{}' is now used more than once; later columns shadow earlier ones in records.",
                column.name
            );
        }
        Ok(())
    }

    pub fn set_width(&mut self, index: usize, width: Option<u32>) -> Result<(), String> {
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| format!("Column index {} out of bounds.", index))?;
        column.width = width.map(|w| w.max(MIN_COLUMN_WIDTH));
        Ok(())
    }

    pub fn set_required(&mut self, index: usize, required: bool) -> Result<(), String> {
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| format!("Column index {} out of bounds.", index))?;
        column.required = required;
        Ok(())
    }

    /// Switching to select seeds placeholder options when none exist;
    /// switching away drops them.
    pub fn set_kind(&mut self, index: usize, kind: ColumnKind) -> Result<(), String> {
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| format!("Column index {} out of bounds.", index))?;
        column.kind = kind;
        column.ensure_options_consistency();
        Ok(())
    }

    /// Replaces a select column's options from a raw comma-separated string.
    /// An input that yields nothing resets to the placeholder pair so a
    /// select never ends up with zero options.
    pub fn set_options_from_input(&mut self, index: usize, raw: &str) -> Result<(), String> {
        let column = self
            .columns
            .get_mut(index)
            .ok_or_else(|| format!("Column index {} out of bounds.", index))?;
        let parsed = parse_options_input(raw);
        column.options = if parsed.is_empty() {
            Some(default_select_options())
        } else {
            Some(parsed)
        };
        Ok(())
    }

    /// Swaps the column with its neighbor at `index + offset`. Out-of-bounds
    /// targets are a no-op; returns whether a swap happened.
    pub fn move_column(&mut self, index: usize, offset: isize) -> bool {
        if index >= self.columns.len() {
            return false;
        }
        let target = index as isize + offset;
        if target < 0 || target as usize >= self.columns.len() {
            return false;
        }
        self.columns.swap(index, target as usize);
        true
    }

    /// Removes the column at `old_index` and reinserts it at `new_index`
    /// (drag-and-drop path; the caller already accounted for the removal
    /// shift).
    pub fn reorder_column(&mut self, old_index: usize, new_index: usize) -> Result<(), String> {
        let num_cols = self.columns.len();
        if old_index >= num_cols || new_index >= num_cols {
            return Err(format!(
                "Invalid indices for reorder. Old: {}, New: {}. Total columns: {}.",
                old_index, new_index, num_cols
            ));
        }
        let column = self.columns.remove(old_index);
        self.columns.insert(new_index, column);
        Ok(())
    }

    /// Restores the options-iff-select invariant on every column. Returns
    /// true if any column was fixed.
    pub fn ensure_options_consistency(&mut self) -> bool {
        let mut changed = false;
        for column in self.columns.iter_mut() {
            if column.ensure_options_consistency() {
                warn!(
                    "Corrected options inconsistency for column '{}' ({}).",
                    column.name, column.kind
                );
                changed = true;
            }
        }
        changed
    }
}

/// Splits a raw comma-separated options string, trimming tokens and dropping
/// empty ones.
pub fn parse_options_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|opt| opt.trim())
        .filter(|opt| !opt.is_empty())
        .map(|opt| opt.to_string())
        .collect()
}

/// Spreadsheet-style column label: 0 -> A, 25 -> Z, 26 -> AA, ...
pub fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut remaining = index as isize;
    loop {
        let modulo = (remaining % 26) as u8;
        label.insert(0, (b'A' + modulo) as char);
        remaining = remaining / 26 - 1;
        if remaining < 0 {
            break;
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_column_names_follow_count() {
        let mut structure = TableStructure::default();
        assert_eq!(structure.add_column(), "Column1");
        assert_eq!(structure.add_column(), "Column2");
        assert_eq!(structure.add_column(), "Column3");
        for column in &structure.columns {
            assert_eq!(column.kind, ColumnKind::Text);
        }
    }

    #[test]
    fn add_column_skips_taken_names() {
        let mut structure = TableStructure::new(vec![ColumnDefinition::new(
            "Column2".to_string(),
            ColumnKind::Text,
        )]);
        assert_eq!(structure.add_column(), "Column3");
    }

    #[test]
    fn kind_change_seeds_and_drops_options() {
        let mut structure = TableStructure::default();
        structure.add_column();
        structure.set_kind(0, ColumnKind::Select).unwrap();
        assert_eq!(structure.columns[0].options, Some(default_select_options()));

        structure.set_kind(0, ColumnKind::Number).unwrap();
        assert_eq!(structure.columns[0].options, None);
    }

    #[test]
    fn options_input_is_trimmed_and_never_empty() {
        let mut structure = TableStructure::default();
        structure.add_column();
        structure.set_kind(0, ColumnKind::Select).unwrap();

        structure
            .set_options_from_input(0, " OK ,  FAIL ,, ")
            .unwrap();
        assert_eq!(
            structure.columns[0].options,
            Some(vec!["OK".to_string(), "FAIL".to_string()])
        );

        structure.set_options_from_input(0, " , ,").unwrap();
        assert_eq!(structure.columns[0].options, Some(default_select_options()));
    }

    #[test]
    fn move_column_round_trips() {
        let mut structure = TableStructure::default();
        for _ in 0..4 {
            structure.add_column();
        }
        let before = structure.headers();
        for i in 0..3 {
            assert!(structure.move_column(i, 1));
            assert!(structure.move_column(i + 1, -1));
            assert_eq!(structure.headers(), before);
        }
    }

    #[test]
    fn move_column_out_of_bounds_is_noop() {
        let mut structure = TableStructure::default();
        structure.add_column();
        structure.add_column();
        let before = structure.headers();
        assert!(!structure.move_column(0, -1));
        assert!(!structure.move_column(1, 1));
        assert!(!structure.move_column(5, 1));
        assert_eq!(structure.headers(), before);
    }

    #[test]
    fn reorder_moves_column_to_insertion_point() {
        let mut structure = TableStructure::default();
        for _ in 0..4 {
            structure.add_column();
        }
        structure.reorder_column(0, 2).unwrap();
        assert_eq!(
            structure.headers(),
            vec!["Column2", "Column3", "Column1", "Column4"]
        );
        assert!(structure.reorder_column(4, 0).is_err());
    }

    #[test]
    fn column_labels_match_spreadsheet_convention() {
        let cases = [
            (0, "A"),
            (1, "B"),
            (25, "Z"),
            (26, "AA"),
            (27, "AB"),
            (51, "AZ"),
            (52, "BA"),
        ];
        for (index, expected) in cases {
            assert_eq!(column_label(index), expected, "index {}", index);
        }
    }

    #[test]
    fn consistency_fix_reports_changes() {
        let mut column = ColumnDefinition::new("A".to_string(), ColumnKind::Text);
        column.options = Some(vec!["stray".to_string()]);
        assert!(column.ensure_options_consistency());
        assert_eq!(column.options, None);

        let mut select = ColumnDefinition::new("B".to_string(), ColumnKind::Select);
        select.options = None;
        assert!(select.ensure_options_consistency());
        assert_eq!(select.options, Some(default_select_options()));
        assert!(!select.ensure_options_consistency());
    }
}
