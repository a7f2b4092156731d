// src/forms/systems/logic/update_column_width.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestUpdateColumnWidth};
use crate::forms::resources::FormSession;

/// Applies width updates, including the per-frame stream produced by an
/// active drag-resize. The 50 px floor is enforced in the model.
pub fn handle_update_column_width(
    mut events: EventReader<RequestUpdateColumnWidth>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        if let Err(err) = session.structure.set_width(event.column_index, event.width) {
            error!(
                "Failed to set width for column {}: {}",
                event.column_index, err
            );
            feedback_writer.write(OperationFeedback {
                message: format!("Width update failed: {}", err),
                is_error: true,
            });
        }
    }
}
