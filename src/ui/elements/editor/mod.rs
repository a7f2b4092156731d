// src/ui/elements/editor/mod.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub mod designer_panel;
pub mod preview_table;
pub mod record_table;
pub mod state;

use crate::forms::events::{
    RequestAddColumn, RequestAddRow, RequestApplyStructureField, RequestCommitStructure,
    RequestDeleteColumn, RequestDeleteRow, RequestMoveColumn, RequestPickCellPayload,
    RequestReorderColumn, RequestSaveRecord, RequestSaveTemplate, RequestUpdateColumnKind,
    RequestUpdateColumnName, RequestUpdateColumnOptions, RequestUpdateColumnRequired,
    RequestUpdateColumnWidth, UpdateCellEvent,
};
use crate::forms::resources::FormSession;
use crate::ui::elements::{bottom_panel, popups, top_panel};
use crate::ui::UiFeedbackState;
use designer_panel::show_designer_panel;
use preview_table::show_preview_table;
use record_table::show_record_table;
use state::{EditorScreen, EditorWindowState};

/// Writers for every designer-screen operation, bundled so the editor system
/// stays within the system-param limit.
#[derive(SystemParam)]
pub struct DesignerEvents<'w> {
    pub add_column: EventWriter<'w, RequestAddColumn>,
    pub delete_column: EventWriter<'w, RequestDeleteColumn>,
    pub update_name: EventWriter<'w, RequestUpdateColumnName>,
    pub update_kind: EventWriter<'w, RequestUpdateColumnKind>,
    pub update_required: EventWriter<'w, RequestUpdateColumnRequired>,
    pub update_options: EventWriter<'w, RequestUpdateColumnOptions>,
    pub update_width: EventWriter<'w, RequestUpdateColumnWidth>,
    pub move_column: EventWriter<'w, RequestMoveColumn>,
    pub reorder_column: EventWriter<'w, RequestReorderColumn>,
    pub apply_structure_field: EventWriter<'w, RequestApplyStructureField>,
    pub commit_structure: EventWriter<'w, RequestCommitStructure>,
    pub save_template: EventWriter<'w, RequestSaveTemplate>,
}

/// Writers for the record screen.
#[derive(SystemParam)]
pub struct RecordEvents<'w> {
    pub add_row: EventWriter<'w, RequestAddRow>,
    pub delete_row: EventWriter<'w, RequestDeleteRow>,
    pub update_cell: EventWriter<'w, UpdateCellEvent>,
    pub pick_payload: EventWriter<'w, RequestPickCellPayload>,
    pub save_record: EventWriter<'w, RequestSaveRecord>,
}

/// Root egui system: panels, popups and the active screen.
pub fn check_sheet_editor_ui(
    mut contexts: EguiContexts,
    mut session: ResMut<FormSession>,
    mut state: ResMut<EditorWindowState>,
    ui_feedback: Res<UiFeedbackState>,
    mut designer_events: DesignerEvents,
    mut record_events: RecordEvents,
) {
    let ctx = contexts.ctx_mut().clone();

    top_panel::show_top_panel(&ctx, &mut session, &mut state);
    bottom_panel::show_bottom_panel(&ctx, &session, &ui_feedback);
    popups::show_delete_column_popup(
        &ctx,
        &mut state,
        &session,
        &mut designer_events.delete_column,
    );

    egui::CentralPanel::default().show(&ctx, |ui| match state.screen {
        EditorScreen::Designer => {
            egui::ScrollArea::vertical()
                .id_salt("designer_scroll")
                .show(ui, |scroll_ui| {
                    show_designer_panel(scroll_ui, &mut session, &mut state, &mut designer_events);
                    scroll_ui.separator();
                    show_preview_table(scroll_ui, &ctx, &session, &mut state, &mut designer_events);
                });
        }
        EditorScreen::Records => {
            egui::ScrollArea::both()
                .id_salt("record_scroll")
                .show(ui, |scroll_ui| {
                    show_record_table(scroll_ui, &session, &mut record_events);
                });
        }
    });
}
