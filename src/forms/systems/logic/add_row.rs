// src/forms/systems/logic/add_row.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestAddRow};
use crate::forms::resources::FormSession;

pub fn handle_add_row_request(
    mut events: EventReader<RequestAddRow>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for _ in events.read() {
        let row_index = session.dataset.add_row();
        session.refresh_data_field();
        let msg = format!("Added row {}.", row_index + 1);
        info!("{}", msg);
        feedback_writer.write(OperationFeedback {
            message: msg,
            is_error: false,
        });
    }
}
