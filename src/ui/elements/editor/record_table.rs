// src/ui/elements/editor/record_table.rs
use bevy_egui::egui::{self, Color32};
use egui_extras::{Column, TableBuilder};

use super::RecordEvents;
use crate::forms::definitions::DEFAULT_COLUMN_WIDTH;
use crate::forms::events::{
    RequestAddRow, RequestDeleteRow, RequestSaveRecord, UpdateCellEvent,
};
use crate::forms::resources::FormSession;
use crate::ui::common::edit_cell_widget;

const ACTION_COLUMN_WIDTH: f32 = 64.0;
const ROW_NUMBER_WIDTH: f32 = 30.0;

/// The data-entry grid: action column, row numbers, one editable cell per
/// schema column and row. Cell edits stream through `UpdateCellEvent`.
pub fn show_record_table(
    ui: &mut egui::Ui,
    session: &FormSession,
    events: &mut RecordEvents,
) {
    ui.horizontal(|bar_ui| {
        if bar_ui.button("Add row").clicked() {
            events.add_row.write(RequestAddRow);
        }
        if bar_ui.button("Save record").clicked() {
            events.save_record.write(RequestSaveRecord);
        }
        bar_ui.weak(format!("{} row(s)", session.dataset.len()));
    });
    ui.separator();

    if session.structure.is_empty() {
        ui.weak("This template has no columns; nothing to fill in.");
        return;
    }

    let columns = session.structure.columns.clone();
    let num_rows = session.dataset.len();
    let can_delete = num_rows > 1;
    let row_height = 24.0;

    let mut builder = TableBuilder::new(ui)
        .id_salt("record_grid")
        .striped(true)
        .resizable(false)
        .column(Column::exact(ACTION_COLUMN_WIDTH))
        .column(Column::exact(ROW_NUMBER_WIDTH));
    for column in &columns {
        builder = builder.column(Column::exact(
            column.width.unwrap_or(DEFAULT_COLUMN_WIDTH) as f32
        ));
    }

    builder
        .header(24.0, |mut header_row| {
            header_row.col(|cell_ui| {
                cell_ui.strong("Actions");
            });
            header_row.col(|cell_ui| {
                cell_ui.strong("#");
            });
            for column in &columns {
                header_row.col(|cell_ui| {
                    cell_ui.horizontal(|h| {
                        h.strong(&column.name);
                        if column.required {
                            h.label(egui::RichText::new("*").color(Color32::LIGHT_RED));
                        }
                    });
                });
            }
        })
        .body(|body| {
            let mut body = body;
            body.rows(row_height, num_rows, |mut row| {
                let r_idx = row.index();
                row.col(|cell_ui| {
                    if cell_ui
                        .add_enabled(can_delete, egui::Button::new("Delete").small())
                        .on_disabled_hover_text("At least one row must remain")
                        .clicked()
                    {
                        events.delete_row.write(RequestDeleteRow { row_index: r_idx });
                    }
                });
                row.col(|cell_ui| {
                    cell_ui.label((r_idx + 1).to_string());
                });
                for (c_idx, column) in columns.iter().enumerate() {
                    row.col(|cell_ui| {
                        let cell_id = egui::Id::new("record_cell").with(r_idx).with(c_idx);
                        let current_text = session.dataset.text(r_idx, &column.name).to_string();
                        let current_flag = session.dataset.flag(r_idx, &column.name);
                        if let Some(new_value) = edit_cell_widget(
                            cell_ui,
                            cell_id,
                            column,
                            r_idx,
                            c_idx,
                            &current_text,
                            current_flag,
                            &mut events.pick_payload,
                        ) {
                            events.update_cell.write(UpdateCellEvent {
                                row_index: r_idx,
                                field: column.name.clone(),
                                value: new_value,
                            });
                        }
                    });
                }
            });
        });
}
