// src/forms/systems/logic/delete_column.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestDeleteColumn};
use crate::forms::resources::FormSession;

/// Runs after the confirmation popup; the structure is allowed to become
/// empty. Record values keyed by the removed column stay in the rows and
/// simply stop rendering.
pub fn handle_delete_column_request(
    mut events: EventReader<RequestDeleteColumn>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        match session.structure.delete_column(event.column_index) {
            Ok(column) => {
                let msg = format!("Deleted column '{}'.", column.name);
                info!("{}", msg);
                feedback_writer.write(OperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                error!("Failed to delete column {}: {}", event.column_index, err);
                feedback_writer.write(OperationFeedback {
                    message: format!("Delete column failed: {}", err),
                    is_error: true,
                });
            }
        }
    }
}
