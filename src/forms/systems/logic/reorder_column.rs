// src/forms/systems/logic/reorder_column.rs
use bevy::prelude::*;

use crate::forms::events::{OperationFeedback, RequestMoveColumn, RequestReorderColumn};
use crate::forms::resources::FormSession;

/// Up/down buttons: swap with the neighbor, silently ignoring edges.
pub fn handle_move_column_request(
    mut events: EventReader<RequestMoveColumn>,
    mut session: ResMut<FormSession>,
) {
    for event in events.read() {
        if session.structure.move_column(event.column_index, event.offset) {
            info!(
                "Moved column {} by {}.",
                event.column_index, event.offset
            );
        } else {
            trace!(
                "Ignored out-of-bounds move for column {} (offset {}).",
                event.column_index,
                event.offset
            );
        }
    }
}

/// Drag-and-drop: the UI already collapsed the pointer position into a final
/// insertion index, so this is a plain remove-and-reinsert.
pub fn handle_reorder_column_request(
    mut events: EventReader<RequestReorderColumn>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        if event.old_index == event.new_index {
            trace!(
                "Skipping reorder: old and new indices are the same ({}).",
                event.old_index
            );
            continue;
        }
        match session
            .structure
            .reorder_column(event.old_index, event.new_index)
        {
            Ok(()) => {
                let msg = format!(
                    "Reordered column from index {} to {}.",
                    event.old_index, event.new_index
                );
                info!("{}", msg);
                feedback_writer.write(OperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(err) => {
                error!("Failed to reorder column: {}", err);
                feedback_writer.write(OperationFeedback {
                    message: format!("Column reorder failed: {}", err),
                    is_error: true,
                });
            }
        }
    }
}
