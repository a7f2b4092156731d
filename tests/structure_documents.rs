// tests/structure_documents.rs
//
// End-to-end checks of the serialization boundary: structure documents
// round-trip exactly, malformed input degrades instead of failing, and the
// record submission buffer matches what a form post would carry.

use checksheet::forms::dataset::CellValue;
use checksheet::forms::definitions::{ColumnDefinition, ColumnKind, TableStructure};
use checksheet::forms::documents::{
    parse_dataset, parse_structure, parse_structure_or_empty, serialize_dataset,
    serialize_structure,
};
use checksheet::forms::resources::FormSession;

fn inspection_structure() -> TableStructure {
    let mut device = ColumnDefinition::new("Device".to_string(), ColumnKind::Text);
    device.required = true;
    device.width = Some(140);
    let mut status = ColumnDefinition::new("Status".to_string(), ColumnKind::Select);
    status.options = Some(vec!["OK".to_string(), "FAIL".to_string()]);
    status.width = None;
    let checked = ColumnDefinition::new("Checked At".to_string(), ColumnKind::Datetime);
    TableStructure::new(vec![device, status, checked])
}

#[test]
fn structure_documents_round_trip() {
    let structure = inspection_structure();
    let document = serialize_structure(&structure);
    let reparsed = parse_structure(&document).expect("document should parse");

    assert_eq!(reparsed.headers(), structure.headers());
    for (a, b) in reparsed.columns.iter().zip(structure.columns.iter()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.width, b.width);
        assert_eq!(a.required, b.required);
        assert_eq!(a.options, b.options);
    }
}

#[test]
fn malformed_documents_degrade_to_empty() {
    for bad in ["{", "[1, 2]", "{\"columns\": \"nope\"}", "null"] {
        let structure = parse_structure_or_empty(bad);
        assert!(structure.is_empty(), "input {:?} should fall back", bad);
    }
}

#[test]
fn unknown_column_type_is_a_document_error() {
    let result = parse_structure(r#"{"columns": [{"name": "X", "type": "telepathy"}]}"#);
    assert!(result.is_err());
}

#[test]
fn filling_in_a_record_produces_the_submitted_document() {
    // The data-entry flow of a one-row sheet: load a template, edit two
    // cells, read back the submission buffer.
    let mut session = FormSession::default();
    session.structure = inspection_structure();
    session.commit_structure_field();

    assert_eq!(session.dataset.len(), 1);
    session
        .dataset
        .set_value(0, "Device", CellValue::Text("Pump-1".to_string()))
        .unwrap();
    session.refresh_data_field();
    session
        .dataset
        .set_value(0, "Status", CellValue::Text("FAIL".to_string()))
        .unwrap();
    session.refresh_data_field();

    assert_eq!(session.data_field, r#"[{"Device":"Pump-1","Status":"FAIL"}]"#);

    // The buffer is itself a loadable record document.
    let reloaded = parse_dataset(&session.data_field).unwrap();
    assert_eq!(reloaded.text(0, "Device"), "Pump-1");
    assert_eq!(serialize_dataset(&reloaded), session.data_field);
}

#[test]
fn single_record_documents_normalize_to_a_list() {
    let dataset = parse_dataset(r#"{"Device": "Valve-7", "Verified": true}"#).unwrap();
    assert_eq!(dataset.len(), 1);
    assert!(dataset.flag(0, "Verified"));
    assert_eq!(
        serialize_dataset(&dataset),
        r#"[{"Device":"Valve-7","Verified":true}]"#
    );
}
