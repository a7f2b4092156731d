// src/forms/systems/logic/add_column.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestAddColumn};
use crate::forms::resources::FormSession;

pub fn handle_add_column_request(
    mut events: EventReader<RequestAddColumn>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for _ in events.read() {
        let name = session.structure.add_column();
        let msg = format!("Added column '{}'.", name);
        info!("{}", msg);
        feedback_writer.write(OperationFeedback {
            message: msg,
            is_error: false,
        });
    }
}
