//! egui rendering of the iconizer options panel.
//!
//! The panel is a projection of [`OptionsController`]: every frame it reads
//! the current field values and layout, and writes edits back through the
//! controller's setters. Rows whose layout size is collapsed are skipped.

use iconizer_config::{IconizerMode, TabColor};

use crate::controller::OptionsController;
use crate::layout::{LayoutRow, RowSize};
use crate::section::{INPUT_WIDTH, SWATCH_SIZE, section_heading, subsection_label};
use crate::tab_color_row::SwatchStyle;
use crate::traits::{ColorPicker, OptionPageHost};

/// Rows of the form grid, in on-screen order. The tab color editor is drawn
/// below the form grid because it spans both columns.
const FORM_ROWS: [LayoutRow; 6] = [
    LayoutRow::Mode,
    LayoutRow::HorizontalMargin,
    LayoutRow::VerticalMargin,
    LayoutRow::IconTextSpacing,
    LayoutRow::RotateIcons,
    LayoutRow::TabColorsCheckbox,
];

/// Convert a tab color for display. egui colors are premultiplied, so this is
/// never used to round-trip a value.
pub fn to_egui(color: TabColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Draw the whole options panel.
pub fn show_options_panel<H: OptionPageHost>(
    ui: &mut egui::Ui,
    controller: &mut OptionsController<H>,
    picker: &mut dyn ColorPicker,
) {
    section_heading(ui, "Tab Decoration");

    egui::Grid::new("iconizer_options_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .min_row_height(crate::layout::ROW_HEIGHT)
        .show(ui, |ui| {
            for row in FORM_ROWS {
                // Re-read per row: an edit above may have changed the layout.
                if controller.layout().size(row) == RowSize::Collapsed {
                    continue;
                }
                show_form_row(ui, controller, row);
                ui.end_row();
            }
        });

    if controller.layout().size(LayoutRow::TabColorsEditor).is_visible() {
        subsection_label(ui, "Tab Colors");
        show_tab_color_editor(ui, controller, picker);
    }
}

fn show_form_row<H: OptionPageHost>(
    ui: &mut egui::Ui,
    controller: &mut OptionsController<H>,
    row: LayoutRow,
) {
    match row {
        LayoutRow::Mode => {
            ui.label("Mode:");
            let mut mode = controller.mode();
            egui::ComboBox::from_id_salt("iconizer_mode")
                .selected_text(mode.display_name())
                .show_ui(ui, |ui| {
                    for candidate in IconizerMode::all() {
                        ui.selectable_value(&mut mode, *candidate, candidate.display_name());
                    }
                });
            controller.set_mode(mode);
        }
        LayoutRow::HorizontalMargin => {
            ui.label("Horizontal margin:");
            let mut value = controller.horizontal_spacing();
            if spacing_input(ui, &mut value, "Space left and right of each tab caption") {
                controller.set_horizontal_spacing(value);
            }
        }
        LayoutRow::VerticalMargin => {
            ui.label("Vertical margin:");
            let mut value = controller.vertical_spacing();
            if spacing_input(ui, &mut value, "Space above and below each tab caption") {
                controller.set_vertical_spacing(value);
            }
        }
        LayoutRow::IconTextSpacing => {
            ui.label("Icon/text spacing:");
            let mut value = controller.icon_text_spacing();
            if spacing_input(ui, &mut value, "Gap between a tab's icon and its caption") {
                controller.set_icon_text_spacing(value);
            }
        }
        LayoutRow::RotateIcons => {
            ui.label("");
            let mut rotate = controller.rotate_vertical_tab_icons();
            if ui
                .checkbox(&mut rotate, "Rotate icons in vertical tabs")
                .changed()
            {
                controller.set_rotate_vertical_tab_icons(rotate);
            }
        }
        LayoutRow::TabColorsCheckbox => {
            ui.label("");
            let mut use_tab_colors = controller.use_tab_colors();
            if ui
                .checkbox(&mut use_tab_colors, "Use custom tab colors")
                .changed()
            {
                controller.set_use_tab_colors(use_tab_colors);
            }
        }
        LayoutRow::TabColorsEditor => {}
    }
}

/// Spacings have no upper bound; a loaded value must survive rendering as is.
fn spacing_input(ui: &mut egui::Ui, value: &mut f64, hover: &str) -> bool {
    ui.add(
        egui::DragValue::new(value)
            .range(0.0..=f64::INFINITY)
            .clamp_existing_to_range(false)
            .speed(0.25)
            .max_decimals(2)
            .suffix(" px"),
    )
    .on_hover_text(hover)
    .changed()
}

enum RowAction {
    Pick(usize),
    Remove(usize),
}

fn show_tab_color_editor<H: OptionPageHost>(
    ui: &mut egui::Ui,
    controller: &mut OptionsController<H>,
    picker: &mut dyn ColorPicker,
) {
    let mut action = None;

    egui::Grid::new("iconizer_tab_colors")
        .num_columns(4)
        .striped(true)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Tab caption").strong());
            ui.label(egui::RichText::new("Color").strong());
            ui.label("");
            ui.label("");
            ui.end_row();

            for index in 0..controller.table().len() {
                let Some(row) = controller.table().row(index).cloned() else {
                    continue;
                };

                let mut tab_text = row.tab_text().to_string();
                if ui
                    .add(egui::TextEdit::singleline(&mut tab_text).desired_width(INPUT_WIDTH))
                    .changed()
                {
                    controller.set_row_tab_text(index, &tab_text);
                }

                let mut color_text = row.color_text().to_string();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut color_text)
                            .desired_width(INPUT_WIDTH / 2.0)
                            .hint_text("#RRGGBB"),
                    )
                    .changed()
                {
                    controller.set_row_color_text(index, &color_text);
                }

                let swatch = match row.swatch() {
                    SwatchStyle::Filled(color) => ui.add(
                        egui::Button::new("")
                            .fill(to_egui(color))
                            .min_size(SWATCH_SIZE),
                    ),
                    SwatchStyle::SystemDefault => {
                        ui.add(egui::Button::new("…").min_size(SWATCH_SIZE))
                    }
                };
                if swatch.on_hover_text("Choose a color").clicked() {
                    action = Some(RowAction::Pick(index));
                }

                if ui.small_button("✖").on_hover_text("Remove").clicked() {
                    action = Some(RowAction::Remove(index));
                }
                ui.end_row();
            }
        });

    if ui.button("Add tab color").clicked() {
        controller.add_tab_color_row();
    }

    match action {
        Some(RowAction::Pick(index)) => {
            controller.pick_row_color(index, picker);
        }
        Some(RowAction::Remove(index)) => {
            controller.remove_tab_color_row(index);
        }
        None => {}
    }
}
