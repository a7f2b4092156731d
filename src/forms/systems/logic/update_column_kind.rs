// src/forms/systems/logic/update_column_kind.rs
use bevy::prelude::*;

use crate::forms::events::{
    OperationFeedback, RequestUpdateColumnKind, RequestUpdateColumnRequired,
};
use crate::forms::resources::FormSession;

/// Kind changes keep the options invariant: switching to select seeds the
/// placeholder pair, switching away drops the options entirely.
pub fn handle_update_column_kind(
    mut events: EventReader<RequestUpdateColumnKind>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        match session.structure.set_kind(event.column_index, event.kind) {
            Ok(()) => {
                info!(
                    "Column {} is now kind '{}'.",
                    event.column_index, event.kind
                );
            }
            Err(err) => {
                error!(
                    "Failed to change kind for column {}: {}",
                    event.column_index, err
                );
                feedback_writer.write(OperationFeedback {
                    message: format!("Type change failed: {}", err),
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_update_column_required(
    mut events: EventReader<RequestUpdateColumnRequired>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        if let Err(err) = session
            .structure
            .set_required(event.column_index, event.required)
        {
            error!(
                "Failed to set required flag for column {}: {}",
                event.column_index, err
            );
            feedback_writer.write(OperationFeedback {
                message: format!("Required flag update failed: {}", err),
                is_error: true,
            });
        }
    }
}
