// src/forms/systems/logic/update_column_name.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestUpdateColumnName};
use crate::forms::resources::FormSession;

pub fn handle_update_column_name(
    mut events: EventReader<RequestUpdateColumnName>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        let trimmed = event.new_name.trim();
        if trimmed.is_empty() {
            // Keep the old name rather than producing an unkeyable column.
            trace!(
                "Ignoring empty rename for column {}.",
                event.column_index
            );
            continue;
        }
        if let Err(err) = session
            .structure
            .rename_column(event.column_index, trimmed.to_string())
        {
            error!("Failed to rename column {}: {}", event.column_index, err);
            feedback_writer.write(OperationFeedback {
                message: format!("Rename failed: {}", err),
                is_error: true,
            });
        }
    }
}
