// src/ui/elements/popups/delete_column_popup.rs
use bevy::prelude::EventWriter;
use bevy_egui::egui;

use crate::forms::events::RequestDeleteColumn;
use crate::forms::resources::FormSession;
use crate::ui::elements::editor::state::EditorWindowState;

/// Confirmation dialog shown before a column is removed from the structure.
pub fn show_delete_column_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    session: &FormSession,
    delete_writer: &mut EventWriter<RequestDeleteColumn>,
) {
    if !state.show_delete_column_popup {
        return;
    }
    let Some(column_index) = state.delete_column_target else {
        state.show_delete_column_popup = false;
        return;
    };
    let column_name = session
        .structure
        .get(column_index)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("#{}", column_index + 1));

    let mut popup_open = state.show_delete_column_popup;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Delete column")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label(format!("Delete the column '{}'?", column_name));
            ui.weak("Saved record values keyed by this column are kept but no longer shown.");
            ui.separator();
            ui.horizontal(|buttons_ui| {
                if buttons_ui.button("Delete").clicked() {
                    confirmed = true;
                }
                if buttons_ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        delete_writer.write(RequestDeleteColumn { column_index });
        // Gesture and draft state is index-keyed; indices just shifted.
        state.reset_column_gestures();
    }
    if confirmed || cancelled || !popup_open {
        state.show_delete_column_popup = false;
        state.delete_column_target = None;
    }
}
