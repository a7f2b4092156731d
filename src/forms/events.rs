// src/forms/events.rs
use bevy::prelude::Event;

use super::dataset::CellValue;
use super::definitions::ColumnKind;

/// Sent when the user clicks "Add column" in the designer.
/// Handled by systems in `forms::systems::logic`.
#[derive(Event, Debug, Clone)]
pub struct RequestAddColumn;

/// Sent after the user confirms the delete-column popup.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteColumn {
    pub column_index: usize,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateColumnName {
    pub column_index: usize,
    pub new_name: String,
}

/// `width == None` restores the default layout width. Live drag-resize sends
/// this every frame; the document field is only rewritten on release via
/// `RequestCommitStructure`.
#[derive(Event, Debug, Clone)]
pub struct RequestUpdateColumnWidth {
    pub column_index: usize,
    pub width: Option<u32>,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateColumnRequired {
    pub column_index: usize,
    pub required: bool,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateColumnKind {
    pub column_index: usize,
    pub kind: ColumnKind,
}

/// Raw comma-separated options text for a select column.
#[derive(Event, Debug, Clone)]
pub struct RequestUpdateColumnOptions {
    pub column_index: usize,
    pub raw_input: String,
}

/// Neighbor swap from the designer's up/down buttons (`offset` is ±1).
#[derive(Event, Debug, Clone)]
pub struct RequestMoveColumn {
    pub column_index: usize,
    pub offset: isize,
}

/// Drag-and-drop reorder from the preview header. `new_index` is the final
/// insertion index, already adjusted for the removal shift.
#[derive(Event, Debug, Clone)]
pub struct RequestReorderColumn {
    pub old_index: usize,
    pub new_index: usize,
}

/// Parse the on-screen structure field back into the live structure.
#[derive(Event, Debug, Clone)]
pub struct RequestApplyStructureField;

/// Serialize the live structure into the designer's document field
/// (the save action of the authoring screen).
#[derive(Event, Debug, Clone)]
pub struct RequestCommitStructure;

/// Write the committed template document to disk.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveTemplate;

/// Sent when the user clicks "Add row" in the record editor.
#[derive(Event, Debug, Clone)]
pub struct RequestAddRow;

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteRow {
    pub row_index: usize,
}

/// A cell edit from the record grid. Applied write-through: the submission
/// buffer is refreshed immediately after the dataset mutation.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub row_index: usize,
    pub field: String,
    pub value: CellValue,
}

/// Open a file dialog for an image/file cell and store the picked file as a
/// data URI in that cell.
#[derive(Event, Debug, Clone)]
pub struct RequestPickCellPayload {
    pub row_index: usize,
    pub column_index: usize,
}

/// Flush the submission buffer and write the record document to disk.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveRecord;

/// User-visible outcome of an operation, rendered in the status strip.
#[derive(Event, Debug, Clone)]
pub struct OperationFeedback {
    pub message: String,
    pub is_error: bool,
}
