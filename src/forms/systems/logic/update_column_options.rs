// src/forms/systems/logic/update_column_options.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestUpdateColumnOptions};
use crate::forms::resources::FormSession;

pub fn handle_update_column_options(
    mut events: EventReader<RequestUpdateColumnOptions>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        if let Err(err) = session
            .structure
            .set_options_from_input(event.column_index, &event.raw_input)
        {
            error!(
                "Failed to update options for column {}: {}",
                event.column_index, err
            );
            feedback_writer.write(OperationFeedback {
                message: format!("Options update failed: {}", err),
                is_error: true,
            });
        }
    }
}
