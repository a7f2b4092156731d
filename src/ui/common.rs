// src/ui/common.rs
use bevy::prelude::*;
use bevy_egui::egui::{self, Color32};

use crate::forms::dataset::CellValue;
use crate::forms::definitions::{ColumnDefinition, ColumnKind};
use crate::forms::events::RequestPickCellPayload;
use crate::ui::validation::{validate_cell_text, ValidationState};
use crate::ui::widgets::{add_centered_checkbox, payload_status_label};

/// Renders the editing widget for one record cell, dispatching on the
/// column's kind. Returns the new value when the user changed it this frame.
#[allow(clippy::too_many_arguments)]
pub fn edit_cell_widget(
    ui: &mut egui::Ui,
    id: egui::Id,
    column: &ColumnDefinition,
    row_index: usize,
    col_index: usize,
    current_text: &str,
    current_flag: bool,
    pick_writer: &mut EventWriter<RequestPickCellPayload>,
) -> Option<CellValue> {
    match column.kind {
        ColumnKind::Checkbox => {
            let mut value_for_widget = current_flag;
            let resp = add_centered_checkbox(ui, &mut value_for_widget);
            resp.changed().then_some(CellValue::Toggle(value_for_widget))
        }
        ColumnKind::Select => {
            let options = column.options.as_deref().unwrap_or(&[]);
            let mut selected = current_text.to_string();
            let display = if selected.is_empty() { "— choose —" } else { selected.as_str() };
            let mut changed = false;
            egui::ComboBox::from_id_salt(id)
                .width(ui.available_width())
                .selected_text(display.to_string())
                .show_ui(ui, |combo_ui| {
                    // Blank entry first so a cell can be cleared again.
                    changed |= combo_ui
                        .selectable_value(&mut selected, String::new(), "— choose —")
                        .changed();
                    for option in options {
                        changed |= combo_ui
                            .selectable_value(&mut selected, option.clone(), option)
                            .changed();
                    }
                });
            changed.then_some(CellValue::Text(selected))
        }
        ColumnKind::Textarea => {
            let mut temp_string = current_text.to_string();
            let resp = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut temp_string)
                    .desired_rows(1)
                    .frame(false),
            );
            resp.changed().then_some(CellValue::Text(temp_string))
        }
        ColumnKind::Image | ColumnKind::File => {
            let mut picked = false;
            ui.horizontal(|cell_ui| {
                let label = payload_summary(column.kind, current_text);
                payload_status_label(cell_ui, &label, !current_text.is_empty());
                if cell_ui.small_button("Upload").clicked() {
                    picked = true;
                }
            });
            if picked {
                pick_writer.write(RequestPickCellPayload {
                    row_index,
                    column_index: col_index,
                });
            }
            None
        }
        // Text, Number and Datetime share a text-like control; number and
        // datetime get a soft invalid tint when the text does not parse.
        _ => {
            let invalid = validate_cell_text(column.kind, current_text) == ValidationState::Invalid;
            let mut temp_string = current_text.to_string();
            let mut edit = egui::TextEdit::singleline(&mut temp_string).frame(false);
            if column.kind == ColumnKind::Datetime {
                edit = edit.hint_text("YYYY-MM-DD HH:MM");
            }
            if invalid {
                edit = edit.text_color(Color32::LIGHT_RED);
            }
            let resp = ui.add_sized(ui.available_size(), edit);
            let resp = if invalid {
                resp.on_hover_text(format!(
                    "'{}' cannot be read as {}.",
                    current_text, column.kind
                ))
            } else {
                resp
            };
            resp.changed().then_some(CellValue::Text(temp_string))
        }
    }
}

fn payload_summary(kind: ColumnKind, current_text: &str) -> String {
    if current_text.is_empty() {
        match kind {
            ColumnKind::Image => "no image".to_string(),
            _ => "no file".to_string(),
        }
    } else {
        // Data URIs blow up by ~4/3; report the decoded size.
        let approx_kb = current_text.len() * 3 / 4 / 1024;
        match kind {
            ColumnKind::Image => format!("image · {} KB", approx_kb),
            _ => format!("file · {} KB", approx_kb),
        }
    }
}
