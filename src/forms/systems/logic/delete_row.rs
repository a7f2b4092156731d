// src/forms/systems/logic/delete_row.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestDeleteRow};
use crate::forms::resources::FormSession;

/// The dataset never drops below one row; the model enforces it and the
/// rejection is surfaced as feedback rather than an error state.
pub fn handle_delete_row_request(
    mut events: EventReader<RequestDeleteRow>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        match session.dataset.delete_row(event.row_index) {
            Ok(()) => {
                session.refresh_data_field();
                let msg = format!("Deleted row {}.", event.row_index + 1);
                info!("{}", msg);
                feedback_writer.write(OperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                warn!("Refused to delete row {}: {}", event.row_index, err);
                feedback_writer.write(OperationFeedback {
                    message: err,
                    is_error: true,
                });
            }
        }
    }
}
