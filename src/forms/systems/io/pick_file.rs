// src/forms/systems/io/pick_file.rs

use base64::Engine;
use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::forms::dataset::CellValue;
use crate::forms::definitions::ColumnKind;
use crate::forms::events::{OperationFeedback, RequestPickCellPayload};
use crate::forms::resources::FormSession;

/// Opens a modal file dialog for an image/file cell and stores the picked
/// file's content as a data URI in the dataset. The dialog and the read are
/// synchronous, so only one pick can ever be in flight.
pub fn handle_pick_cell_payload(
    mut events: EventReader<RequestPickCellPayload>,
    mut session: ResMut<FormSession>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in events.read() {
        let Some(column) = session.structure.get(event.column_index).cloned() else {
            error!(
                "Pick requested for unknown column index {}.",
                event.column_index
            );
            continue;
        };

        let mut dialog = rfd::FileDialog::new();
        if column.kind == ColumnKind::Image {
            dialog = dialog.add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"]);
        }
        let Some(path) = dialog.pick_file() else {
            trace!("File pick cancelled for column '{}'.", column.name);
            continue;
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to read picked file {:?}: {}", path, e);
                feedback_writer.write(OperationFeedback {
                    message: format!("Could not read file: {}", e),
                    is_error: true,
                });
                continue;
            }
        };

        let mime = match column.kind {
            ColumnKind::Image => match image::guess_format(&bytes) {
                Ok(format) => format.to_mime_type().to_string(),
                Err(e) => {
                    warn!("Picked file {:?} is not a decodable image: {}", path, e);
                    feedback_writer.write(OperationFeedback {
                        message: format!(
                            "'{}' does not look like an image.",
                            path.file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default()
                        ),
                        is_error: true,
                    });
                    continue;
                }
            },
            _ => mime_from_extension(&path),
        };

        let payload = format!(
            "data:{};base64,{}",
            mime,
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        );
        if let Err(err) = session.dataset.set_value(
            event.row_index,
            &column.name,
            CellValue::Text(payload),
        ) {
            error!("Failed to store picked file in cell: {}", err);
            feedback_writer.write(OperationFeedback {
                message: format!("Cell update failed: {}", err),
                is_error: true,
            });
            continue;
        }
        session.refresh_data_field();

        let msg = format!(
            "Attached '{}' ({} KB) to row {}, column '{}'.",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            bytes.len() / 1024,
            event.row_index + 1,
            column.name
        );
        info!("{}", msg);
        feedback_writer.write(OperationFeedback {
            message: msg,
            is_error: false,
        });
    }
}

fn mime_from_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
    .to_string()
}
