// src/ui/elements/editor/preview_table.rs
use bevy_egui::egui::{self, Color32, CursorIcon, Id, Order, PointerButton, Sense, Stroke};
use chrono::Local;
use egui_extras::{Column, TableBuilder};

use super::state::{EditorWindowState, ResizeDrag};
use super::DesignerEvents;
use crate::forms::definitions::{
    column_label, ColumnKind, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
};
use crate::forms::events::{
    RequestCommitStructure, RequestReorderColumn, RequestUpdateColumnWidth,
};
use crate::forms::preview::{sample_cell_flag, sample_cell_text, PREVIEW_ROWS};
use crate::forms::resources::FormSession;

const ROW_NUMBER_WIDTH: f32 = 28.0;
const RESIZE_GRIP_WIDTH: f32 = 6.0;

/// Read-only preview of the structure being designed: letter labels, column
/// headers (draggable to reorder, edge-draggable to resize) and three
/// synthetic sample rows.
pub fn show_preview_table(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    session: &FormSession,
    state: &mut EditorWindowState,
    events: &mut DesignerEvents,
) {
    ui.strong("Preview");
    if session.structure.is_empty() {
        ui.weak("Add a column first.");
        return;
    }

    drive_resize_gesture(ctx, state, events);

    let columns = session.structure.columns.clone();
    let num_cols = columns.len();
    let sample_base = Local::now().naive_local();
    let primary_released_this_frame = ctx.input(|i| i.pointer.primary_released());
    let dnd_id_source = Id::new("column_dnd_context");
    let mut drop_handled_this_frame = false;

    let mut builder = TableBuilder::new(ui)
        .id_salt("structure_preview")
        .striped(true)
        .resizable(false)
        .column(Column::exact(ROW_NUMBER_WIDTH));
    for column in &columns {
        builder = builder.column(Column::exact(
            column.width.unwrap_or(DEFAULT_COLUMN_WIDTH) as f32
        ));
    }

    builder
        .header(40.0, |mut header_row| {
            header_row.col(|cell_ui| {
                cell_ui.vertical(|v| {
                    v.small(" ");
                    v.weak("1");
                });
            });
            for (c_idx, column) in columns.iter().enumerate() {
                header_row.col(|cell_ui| {
                    let item_id = dnd_id_source.with(c_idx);
                    let (_id, response) = cell_ui.allocate_at_least(
                        cell_ui.available_size_before_wrap(),
                        Sense::click_and_drag(),
                    );
                    let rect = response.rect;

                    cell_ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |content_ui| {
                        content_ui.vertical(|v| {
                            v.weak(egui::RichText::new(column_label(c_idx)).small());
                            v.horizontal(|h| {
                                h.strong(&column.name);
                                if column.required {
                                    h.label(egui::RichText::new("*").color(Color32::LIGHT_RED));
                                }
                            });
                        });
                    });

                    // Resize grip along the right edge of the header cell.
                    let grip_rect = egui::Rect::from_min_max(
                        egui::pos2(rect.right() - RESIZE_GRIP_WIDTH, rect.top()),
                        rect.max,
                    );
                    let grip_response =
                        cell_ui.interact(grip_rect, item_id.with("resize"), Sense::drag());
                    let grip_response = grip_response.on_hover_cursor(CursorIcon::ResizeHorizontal);
                    if grip_response.drag_started_by(PointerButton::Primary)
                        && state.column_resize_state.active.is_none()
                    {
                        if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                            state.column_resize_state.active = Some(ResizeDrag {
                                column_index: c_idx,
                                start_x: pos.x,
                                start_width: column.width.unwrap_or(DEFAULT_COLUMN_WIDTH) as f32,
                            });
                        }
                    }

                    // Drag-reorder: only when the press is not on the grip
                    // and no resize is in flight.
                    let pointer_on_grip = ctx
                        .input(|i| i.pointer.hover_pos())
                        .map_or(false, |pos| pos.x > rect.right() - RESIZE_GRIP_WIDTH);
                    if response.drag_started_by(PointerButton::Primary)
                        && !pointer_on_grip
                        && state.column_resize_state.active.is_none()
                        && state.column_drag_state.source_index.is_none()
                    {
                        state.column_drag_state.source_index = Some(c_idx);
                        ctx.set_dragged_id(item_id);
                    }

                    if ctx.is_being_dragged(item_id) {
                        egui::Area::new(item_id.with("drag_preview"))
                            .order(Order::Tooltip)
                            .current_pos(
                                ctx.input(|i| i.pointer.hover_pos())
                                    .unwrap_or(rect.center()),
                            )
                            .movable(false)
                            .show(ctx, |preview_ui| {
                                egui::Frame::popup(preview_ui.style()).show(preview_ui, |fui| {
                                    fui.label(format!("Moving: {}", column.name));
                                });
                            });
                    }

                    // Insertion-side cue: a line on the half of the target
                    // the pointer is on.
                    if let Some(source_idx) = state.column_drag_state.source_index {
                        if source_idx != c_idx && response.hovered() {
                            if ctx.dragged_id() == Some(dnd_id_source.with(source_idx)) {
                                let stroke = Stroke::new(2.0, Color32::GREEN);
                                if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                                    let painter = cell_ui.painter();
                                    if pos.x < rect.center().x {
                                        painter.vline(
                                            rect.left() + stroke.width / 2.0,
                                            rect.y_range(),
                                            stroke,
                                        );
                                    } else {
                                        painter.vline(
                                            rect.right() - stroke.width / 2.0,
                                            rect.y_range(),
                                            stroke,
                                        );
                                    }
                                }
                            }
                        }
                    }

                    // Drop: pointer side of the midpoint picks before/after,
                    // then the removal shift is folded into the final index.
                    if primary_released_this_frame {
                        if let Some(source_idx) = state.column_drag_state.source_index {
                            if response.hovered() {
                                let mut target_drop_idx = c_idx;
                                if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                                    if pos.x > rect.center().x {
                                        target_drop_idx += 1;
                                    }
                                }
                                let final_insert_idx = if source_idx < target_drop_idx {
                                    target_drop_idx.saturating_sub(1)
                                } else {
                                    target_drop_idx
                                };
                                let final_insert_idx =
                                    final_insert_idx.min(num_cols.saturating_sub(1));

                                if source_idx != final_insert_idx {
                                    events.reorder_column.write(RequestReorderColumn {
                                        old_index: source_idx,
                                        new_index: final_insert_idx,
                                    });
                                }
                                state.column_drag_state.source_index = None;
                                ctx.set_dragged_id(Id::NULL);
                                drop_handled_this_frame = true;
                            }
                        }
                    }
                });
            }
        })
        .body(|body| {
            let mut body = body;
            body.rows(22.0, PREVIEW_ROWS, |mut row| {
                let r_idx = row.index();
                row.col(|cell_ui| {
                    // Preview header counts as spreadsheet row 1.
                    cell_ui.weak((r_idx + 2).to_string());
                });
                for column in &columns {
                    row.col(|cell_ui| match column.kind {
                        ColumnKind::Checkbox => {
                            let mut flag = sample_cell_flag(r_idx);
                            cell_ui.add_enabled(false, egui::Checkbox::new(&mut flag, ""));
                        }
                        ColumnKind::Number => {
                            cell_ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |right_ui| {
                                    right_ui.label(sample_cell_text(column, r_idx, sample_base));
                                },
                            );
                        }
                        ColumnKind::Image | ColumnKind::File => {
                            cell_ui.weak(sample_cell_text(column, r_idx, sample_base));
                        }
                        _ => {
                            cell_ui.label(sample_cell_text(column, r_idx, sample_base));
                        }
                    });
                }
            });
        });

    // Release outside any header cancels the drag.
    if primary_released_this_frame && !drop_handled_this_frame {
        if state.column_drag_state.source_index.take().is_some() {
            ctx.set_dragged_id(Id::NULL);
        }
    }
}

/// Per-frame step of an active resize: stream the live width while the
/// pointer is down, commit the document field once it is released.
fn drive_resize_gesture(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    events: &mut DesignerEvents,
) {
    let Some(drag) = state.column_resize_state.active.clone() else {
        return;
    };
    if ctx.input(|i| i.pointer.primary_released() || !i.pointer.primary_down()) {
        state.column_resize_state.active = None;
        events.commit_structure.write(RequestCommitStructure);
        return;
    }
    if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
        let width = (drag.start_width + (pos.x - drag.start_x)).max(MIN_COLUMN_WIDTH as f32);
        events.update_width.write(RequestUpdateColumnWidth {
            column_index: drag.column_index,
            width: Some(width.round() as u32),
        });
    }
}
