// src/ui/elements/bottom_panel.rs
use bevy_egui::egui::{self, Color32};

use crate::forms::resources::FormSession;
use crate::ui::UiFeedbackState;

/// Status strip: last operation outcome on the left, document counts on the
/// right.
pub fn show_bottom_panel(
    ctx: &egui::Context,
    session: &FormSession,
    ui_feedback: &UiFeedbackState,
) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|bar_ui| {
            if !ui_feedback.last_message.is_empty() {
                let color = if ui_feedback.is_error {
                    Color32::LIGHT_RED
                } else {
                    Color32::LIGHT_GREEN
                };
                bar_ui.colored_label(color, &ui_feedback.last_message);
            }
            bar_ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |right_ui| {
                right_ui.weak(format!(
                    "{} column(s) · {} row(s)",
                    session.structure.len(),
                    session.dataset.len()
                ));
            });
        });
    });
}
