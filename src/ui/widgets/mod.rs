// src/ui/widgets/mod.rs
use bevy_egui::egui::{self, Response};

/// Checkbox centered inside the available cell space.
pub fn add_centered_checkbox(ui: &mut egui::Ui, value: &mut bool) -> Response {
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), ui.style().spacing.interact_size.y),
        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
        |centered_ui| centered_ui.checkbox(value, ""),
    )
    .inner
}

/// Weak one-line status label used by upload cells.
pub fn payload_status_label(ui: &mut egui::Ui, text: &str, present: bool) {
    if present {
        ui.label(egui::RichText::new(text).small());
    } else {
        ui.label(egui::RichText::new(text).small().weak());
    }
}
