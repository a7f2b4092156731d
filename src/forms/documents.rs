// src/forms/documents.rs
//
// The serialization boundary: structure documents (`{ "columns": [...] }`,
// pretty-printed) and record documents (JSON array of row objects, compact).
// Parsing is lenient where the surrounding app has a sane fallback and strict
// where silent acceptance would corrupt a document.
use bevy::prelude::error;
use serde_json::Value;
use thiserror::Error;

use super::dataset::{Dataset, RowRecord};
use super::definitions::TableStructure;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("structure document has no `columns` array")]
    MissingColumns,
    #[error("record document must be an object or an array of objects")]
    NotARecordList,
}

/// Parses a structure document. Presence of a `columns` array is the only
/// shape check beyond per-column deserialization.
pub fn parse_structure(input: &str) -> Result<TableStructure, DocumentError> {
    let value: Value = serde_json::from_str(input)?;
    let has_columns = value
        .as_object()
        .and_then(|obj| obj.get("columns"))
        .map_or(false, Value::is_array);
    if !has_columns {
        return Err(DocumentError::MissingColumns);
    }
    let mut structure: TableStructure = serde_json::from_value(value)?;
    structure.ensure_options_consistency();
    Ok(structure)
}

/// Parse with the editor's failure semantics: a malformed document is logged
/// and the editor starts from an empty structure instead of failing.
pub fn parse_structure_or_empty(input: &str) -> TableStructure {
    if input.trim().is_empty() {
        return TableStructure::default();
    }
    match parse_structure(input) {
        Ok(structure) => structure,
        Err(e) => {
            error!("Failed to parse structure document: {}. Starting empty.", e);
            TableStructure::default()
        }
    }
}

pub fn serialize_structure(structure: &TableStructure) -> String {
    match serde_json::to_string_pretty(structure) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to serialize structure document: {}", e);
            "{\n  \"columns\": []\n}".to_string()
        }
    }
}

/// Parses a record document. A single bare row object is accepted and
/// normalized to a one-element list; the returned dataset always has at
/// least one row.
pub fn parse_dataset(input: &str) -> Result<Dataset, DocumentError> {
    let value: Value = serde_json::from_str(input)?;
    let rows: Vec<RowRecord> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(_) => vec![serde_json::from_value(value)?],
        _ => return Err(DocumentError::NotARecordList),
    };
    Ok(Dataset::from_rows(rows))
}

pub fn parse_dataset_or_default(input: &str) -> Dataset {
    if input.trim().is_empty() {
        return Dataset::default();
    }
    match parse_dataset(input) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to parse record document: {}. Starting with one empty row.", e);
            Dataset::default()
        }
    }
}

pub fn serialize_dataset(dataset: &Dataset) -> String {
    match serde_json::to_string(dataset) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to serialize record document: {}", e);
            "[]".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::dataset::CellValue;
    use crate::forms::definitions::{ColumnDefinition, ColumnKind};

    fn device_status_structure() -> TableStructure {
        let mut status = ColumnDefinition::new("Status".to_string(), ColumnKind::Select);
        status.options = Some(vec!["OK".to_string(), "FAIL".to_string()]);
        status.width = None;
        let mut device = ColumnDefinition::new("Device".to_string(), ColumnKind::Text);
        device.width = None;
        TableStructure::new(vec![device, status])
    }

    #[test]
    fn structure_round_trip_preserves_columns() {
        let mut structure = device_status_structure();
        structure.columns[0].required = true;
        structure.columns[0].width = Some(140);

        let serialized = serialize_structure(&structure);
        let reparsed = parse_structure(&serialized).unwrap();
        assert_eq!(reparsed, structure);
    }

    #[test]
    fn structure_document_uses_boundary_field_names() {
        let serialized = serialize_structure(&device_status_structure());
        let value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let first = &value["columns"][0];
        assert_eq!(first["name"], "Device");
        assert_eq!(first["type"], "text");
        // Unset optionals stay out of the document entirely.
        assert!(first.get("width").is_none());
        assert!(first.get("required").is_none());
        assert!(first.get("options").is_none());
        assert_eq!(value["columns"][1]["type"], "select");
    }

    #[test]
    fn malformed_structure_falls_back_to_empty() {
        assert!(parse_structure_or_empty("not json").is_empty());
        assert!(parse_structure_or_empty("{\"title\": \"no columns\"}").is_empty());
        assert!(parse_structure_or_empty("").is_empty());
        assert!(matches!(
            parse_structure("{\"columns\": 3}"),
            Err(DocumentError::MissingColumns)
        ));
    }

    #[test]
    fn parsed_structure_repairs_options_invariant() {
        let structure = parse_structure(
            r#"{"columns": [{"name": "Pick", "type": "select"},
                            {"name": "Note", "type": "text", "options": ["x"]}]}"#,
        )
        .unwrap();
        assert!(structure.columns[0]
            .options
            .as_ref()
            .is_some_and(|opts| !opts.is_empty()));
        assert_eq!(structure.columns[1].options, None);
    }

    #[test]
    fn dataset_accepts_single_record_or_list() {
        let single = parse_dataset(r#"{"Device": "Pump-1"}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.text(0, "Device"), "Pump-1");

        let list = parse_dataset(r#"[{"Device": "A"}, {"Device": "B", "Verified": true}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.flag(1, "Verified"));

        assert!(parse_dataset("42").is_err());
        assert_eq!(parse_dataset("[]").unwrap().len(), 1);
    }

    #[test]
    fn dataset_serialization_is_idempotent() {
        let mut dataset = Dataset::default();
        dataset
            .set_value(0, "Device", CellValue::Text("Pump-1".to_string()))
            .unwrap();
        dataset
            .set_value(0, "Status", CellValue::Text("FAIL".to_string()))
            .unwrap();
        let first = serialize_dataset(&dataset);
        assert_eq!(first, r#"[{"Device":"Pump-1","Status":"FAIL"}]"#);
        assert_eq!(serialize_dataset(&dataset), first);
    }
}
