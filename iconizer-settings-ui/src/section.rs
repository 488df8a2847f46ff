//! Shared sizing constants and heading helpers for the options panel.

/// Standard width for text input controls
pub const INPUT_WIDTH: f32 = 220.0;

/// Size of the color swatch button in the tab color grid
pub const SWATCH_SIZE: egui::Vec2 = egui::Vec2::new(28.0, 18.0);

/// Helper to show a section heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Helper to show a sub-section label with consistent styling.
pub fn subsection_label(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(4.0);
}
