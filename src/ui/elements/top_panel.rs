// src/ui/elements/top_panel.rs
use bevy_egui::egui;

use super::editor::state::{EditorScreen, EditorWindowState};
use crate::forms::resources::FormSession;

/// Template name plus the designer/records screen switch.
pub fn show_top_panel(
    ctx: &egui::Context,
    session: &mut FormSession,
    state: &mut EditorWindowState,
) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|bar_ui| {
            bar_ui.strong("Check Sheet");
            bar_ui.separator();
            bar_ui.label("Template:");
            bar_ui.add(
                egui::TextEdit::singleline(&mut session.template_name)
                    .desired_width(180.0)
                    .hint_text("Template name"),
            );
            bar_ui.separator();
            if bar_ui
                .selectable_label(state.screen == EditorScreen::Designer, "Design")
                .clicked()
            {
                state.screen = EditorScreen::Designer;
                state.reset_column_gestures();
            }
            if bar_ui
                .selectable_label(state.screen == EditorScreen::Records, "Fill in")
                .clicked()
            {
                state.screen = EditorScreen::Records;
                state.reset_column_gestures();
            }
        });
    });
}
