// src/forms/systems/logic/update_cell.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, UpdateCellEvent};
use crate::forms::resources::FormSession;

/// Write-through cell updates: every applied edit immediately resynchronizes
/// the submission buffer, so the buffer is valid at any point in time.
pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    let mut any_applied = false;
    for event in events.read() {
        match session
            .dataset
            .set_value(event.row_index, &event.field, event.value.clone())
        {
            Ok(()) => {
                trace!("Updated cell [{}].{}", event.row_index, event.field);
                any_applied = true;
            }
            Err(err) => {
                error!(
                    "Failed to update cell [{}].{}: {}",
                    event.row_index, event.field, err
                );
                feedback_writer.write(OperationFeedback {
                    message: format!("Cell update failed: {}", err),
                    is_error: true,
                });
            }
        }
    }
    if any_applied {
        session.refresh_data_field();
    }
}
