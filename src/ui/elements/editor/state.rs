// src/ui/elements/editor/state.rs
use bevy::prelude::Resource;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorScreen {
    #[default]
    Designer,
    Records,
}

/// Column drag-reorder gesture: `source_index` is set while a header is
/// being dragged and cleared on any primary-button release.
#[derive(Debug, Clone, Default)]
pub struct ColumnDragState {
    pub source_index: Option<usize>,
}

/// An active drag-resize. Width updates stream live while the pointer moves;
/// the document field is only committed when the gesture ends.
#[derive(Debug, Clone)]
pub struct ResizeDrag {
    pub column_index: usize,
    pub start_x: f32,
    pub start_width: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ColumnResizeState {
    pub active: Option<ResizeDrag>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EditorWindowState {
    pub screen: EditorScreen,
    pub column_drag_state: ColumnDragState,
    pub column_resize_state: ColumnResizeState,
    /// Set while the delete-column confirmation popup is open.
    pub show_delete_column_popup: bool,
    pub delete_column_target: Option<usize>,
    /// Raw options text being typed, keyed by column index, so the input is
    /// not re-normalized under the user's cursor. Entries live only while
    /// the field has focus.
    pub options_drafts: HashMap<usize, String>,
    /// Collapsible structure-document field visibility.
    pub show_structure_field: bool,
}

impl EditorWindowState {
    /// Drops gesture state and drafts that are keyed by column index; called
    /// after structural changes (delete/reorder) that shift indices.
    pub fn reset_column_gestures(&mut self) {
        self.column_drag_state = ColumnDragState::default();
        self.column_resize_state = ColumnResizeState::default();
        self.options_drafts.clear();
    }
}
