// src/forms/plugin.rs
use bevy::prelude::*;

use super::events::{
    OperationFeedback, RequestAddColumn, RequestAddRow, RequestApplyStructureField,
    RequestCommitStructure, RequestDeleteColumn, RequestDeleteRow, RequestMoveColumn,
    RequestPickCellPayload, RequestReorderColumn, RequestSaveRecord, RequestSaveTemplate,
    RequestUpdateColumnKind, RequestUpdateColumnName, RequestUpdateColumnOptions,
    RequestUpdateColumnRequired, RequestUpdateColumnWidth, UpdateCellEvent,
};
use super::resources::FormSession;
use super::systems;

// System sets for ordering within a frame: UI-originated dialogs first,
// registry mutations second, disk writes last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum FormSystemSet {
    UserInput,
    ApplyChanges,
    FileOperations,
}

/// Plugin owning the template structure and record dataset plus every
/// handler that mutates them.
pub struct FormsPlugin;

impl Plugin for FormsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FormSystemSet::UserInput,
                FormSystemSet::ApplyChanges.after(FormSystemSet::UserInput),
                FormSystemSet::FileOperations.after(FormSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<FormSession>();

        app.add_event::<RequestAddColumn>()
            .add_event::<RequestDeleteColumn>()
            .add_event::<RequestUpdateColumnName>()
            .add_event::<RequestUpdateColumnWidth>()
            .add_event::<RequestUpdateColumnRequired>()
            .add_event::<RequestUpdateColumnKind>()
            .add_event::<RequestUpdateColumnOptions>()
            .add_event::<RequestMoveColumn>()
            .add_event::<RequestReorderColumn>()
            .add_event::<RequestApplyStructureField>()
            .add_event::<RequestCommitStructure>()
            .add_event::<RequestSaveTemplate>()
            .add_event::<RequestAddRow>()
            .add_event::<RequestDeleteRow>()
            .add_event::<UpdateCellEvent>()
            .add_event::<RequestPickCellPayload>()
            .add_event::<RequestSaveRecord>()
            .add_event::<OperationFeedback>();

        app.add_systems(
            Startup,
            (
                systems::io::resolve_editor_paths,
                ApplyDeferred,
                systems::io::load_open_documents,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (systems::io::handle_pick_cell_payload,).in_set(FormSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::logic::handle_apply_structure_field,
                systems::logic::handle_add_column_request,
                systems::logic::handle_delete_column_request,
                systems::logic::handle_update_column_name,
                systems::logic::handle_update_column_kind,
                systems::logic::handle_update_column_required,
                systems::logic::handle_update_column_options,
                systems::logic::handle_update_column_width,
                systems::logic::handle_move_column_request,
                systems::logic::handle_reorder_column_request,
                systems::logic::handle_add_row_request,
                systems::logic::handle_delete_row_request,
                systems::logic::handle_cell_update,
                systems::logic::handle_commit_structure,
            )
                .chain()
                .in_set(FormSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            (
                systems::io::handle_save_template_request,
                systems::io::handle_save_record_request,
            )
                .in_set(FormSystemSet::FileOperations),
        );

        info!("FormsPlugin initialized.");
    }
}
