// src/ui/elements/editor/designer_panel.rs
use bevy_egui::egui;

use super::state::EditorWindowState;
use super::DesignerEvents;
use crate::forms::definitions::{
    ColumnKind, DEFAULT_COLUMN_WIDTH, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
};
use crate::forms::events::{
    RequestAddColumn, RequestApplyStructureField, RequestCommitStructure, RequestMoveColumn,
    RequestSaveTemplate, RequestUpdateColumnKind, RequestUpdateColumnName,
    RequestUpdateColumnOptions, RequestUpdateColumnRequired, RequestUpdateColumnWidth,
};
use crate::forms::resources::FormSession;

/// The column authoring table: one row per column with name, kind, options,
/// required flag, width and move/delete actions.
pub fn show_designer_panel(
    ui: &mut egui::Ui,
    session: &mut FormSession,
    state: &mut EditorWindowState,
    events: &mut DesignerEvents,
) {
    ui.horizontal(|bar_ui| {
        if bar_ui.button("Add column").clicked() {
            events.add_column.write(RequestAddColumn);
        }
        if bar_ui.button("Save template").clicked() {
            // Commit runs before the file write within the same frame.
            events.commit_structure.write(RequestCommitStructure);
            events.save_template.write(RequestSaveTemplate);
        }
        bar_ui.checkbox(&mut state.show_structure_field, "Show document");
    });
    ui.separator();

    if session.structure.is_empty() {
        ui.weak("No columns yet. Add one to get started.");
    } else {
        show_column_rows(ui, session, state, events);
    }

    if state.show_structure_field {
        ui.separator();
        show_structure_field(ui, session, events);
    }
}

fn show_column_rows(
    ui: &mut egui::Ui,
    session: &mut FormSession,
    state: &mut EditorWindowState,
    events: &mut DesignerEvents,
) {
    let num_cols = session.structure.len();
    egui::Grid::new("designer_columns")
        .num_columns(6)
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |grid_ui| {
            for header in ["Name", "Type", "Options", "Required", "Width", "Actions"] {
                grid_ui.strong(header);
            }
            grid_ui.end_row();

            for c_idx in 0..num_cols {
                let Some(column) = session.structure.get(c_idx).cloned() else {
                    continue;
                };

                // Name
                let mut name_text = column.name.clone();
                let name_resp = grid_ui.add(
                    egui::TextEdit::singleline(&mut name_text)
                        .desired_width(140.0)
                        .hint_text("Column name (e.g. Device)"),
                );
                if name_resp.changed() {
                    events.update_name.write(RequestUpdateColumnName {
                        column_index: c_idx,
                        new_name: name_text,
                    });
                }

                // Kind
                egui::ComboBox::from_id_salt(("column_kind", c_idx))
                    .selected_text(column.kind.label())
                    .show_ui(grid_ui, |combo_ui| {
                        for kind in ColumnKind::ALL {
                            if combo_ui
                                .selectable_label(column.kind == kind, kind.label())
                                .clicked()
                                && column.kind != kind
                            {
                                events.update_kind.write(RequestUpdateColumnKind {
                                    column_index: c_idx,
                                    kind,
                                });
                                state.options_drafts.remove(&c_idx);
                            }
                        }
                    });

                // Options (select only)
                if column.kind == ColumnKind::Select {
                    let mut options_text = state
                        .options_drafts
                        .get(&c_idx)
                        .cloned()
                        .unwrap_or_else(|| {
                            column
                                .options
                                .as_deref()
                                .unwrap_or(&[])
                                .join(",")
                        });
                    let options_resp = grid_ui.add(
                        egui::TextEdit::singleline(&mut options_text)
                            .desired_width(160.0)
                            .hint_text("Option 1,Option 2,Option 3"),
                    );
                    if options_resp.changed() {
                        events.update_options.write(RequestUpdateColumnOptions {
                            column_index: c_idx,
                            raw_input: options_text.clone(),
                        });
                    }
                    if options_resp.has_focus() {
                        state.options_drafts.insert(c_idx, options_text);
                    } else if options_resp.lost_focus() {
                        state.options_drafts.remove(&c_idx);
                    }
                } else {
                    grid_ui.label("");
                }

                // Required
                let mut required = column.required;
                if grid_ui.checkbox(&mut required, "").changed() {
                    events.update_required.write(RequestUpdateColumnRequired {
                        column_index: c_idx,
                        required,
                    });
                }

                // Width
                grid_ui.horizontal(|width_ui| {
                    let mut width_value = column.width.unwrap_or(DEFAULT_COLUMN_WIDTH);
                    let drag_resp = width_ui.add(
                        egui::DragValue::new(&mut width_value)
                            .range(MIN_COLUMN_WIDTH..=MAX_COLUMN_WIDTH)
                            .suffix(" px"),
                    );
                    if drag_resp.changed() {
                        events.update_width.write(RequestUpdateColumnWidth {
                            column_index: c_idx,
                            width: Some(width_value),
                        });
                    }
                    if column.width.is_some()
                        && width_ui
                            .small_button("auto")
                            .on_hover_text("Use the default layout width")
                            .clicked()
                    {
                        events.update_width.write(RequestUpdateColumnWidth {
                            column_index: c_idx,
                            width: None,
                        });
                    }
                });

                // Actions
                grid_ui.horizontal(|actions_ui| {
                    if actions_ui
                        .add_enabled(c_idx > 0, egui::Button::new("↑").small())
                        .on_hover_text("Move up")
                        .clicked()
                    {
                        events.move_column.write(RequestMoveColumn {
                            column_index: c_idx,
                            offset: -1,
                        });
                    }
                    if actions_ui
                        .add_enabled(c_idx + 1 < num_cols, egui::Button::new("↓").small())
                        .on_hover_text("Move down")
                        .clicked()
                    {
                        events.move_column.write(RequestMoveColumn {
                            column_index: c_idx,
                            offset: 1,
                        });
                    }
                    if actions_ui.small_button("Delete").clicked() {
                        state.show_delete_column_popup = true;
                        state.delete_column_target = Some(c_idx);
                    }
                });

                grid_ui.end_row();
            }
        });
}

/// The read/write structure document field plus its load/refresh actions.
fn show_structure_field(ui: &mut egui::Ui, session: &mut FormSession, events: &mut DesignerEvents) {
    ui.strong("Structure document");
    egui::ScrollArea::vertical()
        .id_salt("structure_field_scroll")
        .max_height(160.0)
        .show(ui, |scroll_ui| {
            scroll_ui.add(
                egui::TextEdit::multiline(&mut session.structure_field)
                    .desired_width(f32::INFINITY)
                    .desired_rows(6)
                    .code_editor(),
            );
        });
    ui.horizontal(|bar_ui| {
        if bar_ui
            .button("Load document")
            .on_hover_text("Parse the field back into the editor")
            .clicked()
        {
            events.apply_structure_field.write(RequestApplyStructureField);
        }
        if bar_ui
            .button("Refresh field")
            .on_hover_text("Serialize the current columns into the field")
            .clicked()
        {
            events.commit_structure.write(RequestCommitStructure);
        }
    });
}
