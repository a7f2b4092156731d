// src/forms/systems/io/save.rs

use bevy::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

use crate::forms::events::{OperationFeedback, RequestSaveRecord, RequestSaveTemplate};
use crate::forms::resources::{EditorPaths, FormSession};
use crate::settings::{io as settings_io, AppSettings};

/// Writes the committed structure document to the template file. The commit
/// handler already ran this frame (ApplyChanges precedes FileOperations), so
/// `structure_field` is current.
pub fn handle_save_template_request(
    mut events: EventReader<RequestSaveTemplate>,
    session: Res<FormSession>,
    paths: Res<EditorPaths>,
    mut settings: ResMut<AppSettings>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    if events.read().next().is_none() {
        return;
    }

    let path = paths.template_path(&session.template_name);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            error!("Failed to ensure template directory {:?}: {}", parent, e);
            feedback_writer.write(OperationFeedback {
                message: format!("Template save failed: {}", e),
                is_error: true,
            });
            return;
        }
    }

    match write_document(&path, &session.structure_field) {
        Ok(()) => {
            let msg = format!("Saved template '{}' to {:?}.", session.template_name, path);
            info!("{}", msg);
            feedback_writer.write(OperationFeedback {
                message: msg,
                is_error: false,
            });
            settings.last_template = Some(session.template_name.clone());
            if let Err(e) = settings_io::save_settings_to_file(settings.as_ref()) {
                warn!("Could not persist app settings: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to save template to {:?}: {}", path, e);
            feedback_writer.write(OperationFeedback {
                message: format!("Template save failed: {}", e),
                is_error: true,
            });
        }
    }
}

/// The record screen's submit: refresh the submission buffer one more time
/// (idempotent) and write it out.
pub fn handle_save_record_request(
    mut events: EventReader<RequestSaveRecord>,
    mut session: ResMut<FormSession>,
    paths: Res<EditorPaths>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    if events.read().next().is_none() {
        return;
    }

    session.refresh_data_field();
    let path = paths.record_path(&session.template_name);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            error!("Failed to ensure record directory {:?}: {}", parent, e);
            feedback_writer.write(OperationFeedback {
                message: format!("Record save failed: {}", e),
                is_error: true,
            });
            return;
        }
    }

    match write_document(&path, &session.data_field) {
        Ok(()) => {
            let msg = format!(
                "Saved {} row(s) to {:?}.",
                session.dataset.len(),
                path
            );
            info!("{}", msg);
            feedback_writer.write(OperationFeedback {
                message: msg,
                is_error: false,
            });
        }
        Err(e) => {
            error!("Failed to save record to {:?}: {}", path, e);
            feedback_writer.write(OperationFeedback {
                message: format!("Record save failed: {}", e),
                is_error: true,
            });
        }
    }
}

fn write_document(path: &std::path::Path, contents: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}
