// src/forms/dataset.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::definitions::ColumnKind;

/// Value held in one record cell. Checkbox columns store `Toggle`; every
/// other kind stores `Text` (image/file cells hold a data-URI payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Toggle(bool),
    Text(String),
}

impl CellValue {
    pub fn empty_for(kind: ColumnKind) -> CellValue {
        if kind.is_boolean() {
            CellValue::Toggle(false)
        } else {
            CellValue::Text(String::new())
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            CellValue::Text(s) => s.as_str(),
            CellValue::Toggle(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            CellValue::Toggle(b) => *b,
            CellValue::Text(_) => false,
        }
    }
}

/// One record row: column name -> value. Absent names render as empty.
pub type RowRecord = BTreeMap<String, CellValue>;

/// Ordered record rows for one check sheet. Never empty: normalization pads
/// to one row and `delete_row` refuses to drop the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<RowRecord>,
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset {
            rows: vec![RowRecord::new()],
        }
    }
}

impl Dataset {
    pub fn from_rows(rows: Vec<RowRecord>) -> Self {
        let mut dataset = Dataset { rows };
        if dataset.rows.is_empty() {
            dataset.rows.push(RowRecord::new());
        }
        dataset
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(RowRecord::new());
        self.rows.len() - 1
    }

    pub fn delete_row(&mut self, row_index: usize) -> Result<(), String> {
        if self.rows.len() <= 1 {
            return Err("At least one row must remain.".to_string());
        }
        if row_index >= self.rows.len() {
            return Err(format!(
                "Row index {} out of bounds ({} rows).",
                row_index,
                self.rows.len()
            ));
        }
        self.rows.remove(row_index);
        Ok(())
    }

    pub fn set_value(
        &mut self,
        row_index: usize,
        field: &str,
        value: CellValue,
    ) -> Result<(), String> {
        let row_count = self.rows.len();
        let row = self.rows.get_mut(row_index).ok_or_else(|| {
            format!("Row index {} out of bounds ({} rows).", row_index, row_count)
        })?;
        row.insert(field.to_string(), value);
        Ok(())
    }

    /// Text shown for a cell; absent values are empty, never an error.
    pub fn text(&self, row_index: usize, field: &str) -> &str {
        self.rows
            .get(row_index)
            .and_then(|row| row.get(field))
            .map_or("", CellValue::as_text)
    }

    /// Checkbox state for a cell; absent values are unchecked.
    pub fn flag(&self, row_index: usize, field: &str) -> bool {
        self.rows
            .get(row_index)
            .and_then(|row| row.get(field))
            .map_or(false, CellValue::as_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_guarantees_one_row() {
        assert_eq!(Dataset::from_rows(Vec::new()).len(), 1);
        assert_eq!(Dataset::default().len(), 1);
    }

    #[test]
    fn delete_row_keeps_at_least_one() {
        for start_len in 1..=5usize {
            let mut dataset = Dataset::from_rows(vec![RowRecord::new(); start_len]);
            for _ in 0..start_len + 2 {
                let _ = dataset.delete_row(0);
            }
            assert_eq!(dataset.len(), 1, "starting from {} rows", start_len);
        }
    }

    #[test]
    fn absent_values_read_as_empty() {
        let dataset = Dataset::default();
        assert_eq!(dataset.text(0, "anything"), "");
        assert!(!dataset.flag(0, "anything"));
        // Out-of-bounds rows degrade the same way.
        assert_eq!(dataset.text(7, "anything"), "");
    }

    #[test]
    fn set_value_round_trips() {
        let mut dataset = Dataset::default();
        dataset
            .set_value(0, "Device", CellValue::Text("Pump-1".to_string()))
            .unwrap();
        dataset
            .set_value(0, "Verified", CellValue::Toggle(true))
            .unwrap();
        assert_eq!(dataset.text(0, "Device"), "Pump-1");
        assert!(dataset.flag(0, "Verified"));
        assert!(dataset.set_value(3, "Device", CellValue::Toggle(false)).is_err());
    }
}
