// src/forms/systems/logic/structure_field.rs
use bevy::prelude::*;

use crate::forms::documents;
use crate::forms::events::{
    OperationFeedback, RequestApplyStructureField, RequestCommitStructure,
};
use crate::forms::resources::FormSession;

/// The save action of the authoring screen: serialize the live structure
/// into the on-screen document field.
pub fn handle_commit_structure(
    mut events: EventReader<RequestCommitStructure>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    if events.read().next().is_none() {
        return;
    }
    session.commit_structure_field();
    info!(
        "Committed structure document ({} columns).",
        session.structure.len()
    );
    feedback_writer.write(OperationFeedback {
        message: format!(
            "Structure saved to document field ({} columns).",
            session.structure.len()
        ),
        is_error: false,
    });
}

/// The reverse direction: parse whatever is in the document field back into
/// the live structure. Malformed text falls back to an empty structure.
pub fn handle_apply_structure_field(
    mut events: EventReader<RequestApplyStructureField>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    if events.read().next().is_none() {
        return;
    }
    match documents::parse_structure(&session.structure_field) {
        Ok(structure) => {
            let msg = format!("Loaded structure document ({} columns).", structure.len());
            session.structure = structure;
            info!("{}", msg);
            feedback_writer.write(OperationFeedback {
                message: msg,
                is_error: false,
            });
        }
        Err(e) => {
            error!("Failed to parse structure field: {}. Starting empty.", e);
            session.structure = Default::default();
            feedback_writer.write(OperationFeedback {
                message: format!("Structure document invalid ({}); editor reset to empty.", e),
                is_error: true,
            });
        }
    }
}
