//! Headless rendering checks for the egui options panel

mod common;

use common::{
    ScriptedPicker, applied_count, initialized_controller, last_applied, sample_configuration,
};
use iconizer::config::{IconizerConfiguration, IconizerMode};
use iconizer::{OptionsController, show_options_panel};

fn render_frame<H: iconizer::OptionPageHost>(
    ctx: &egui::Context,
    controller: &mut OptionsController<H>,
    picker: &mut ScriptedPicker,
) -> egui::FullOutput {
    render_frame_with(ctx, controller, picker, Vec::new())
}

fn render_frame_with<H: iconizer::OptionPageHost>(
    ctx: &egui::Context,
    controller: &mut OptionsController<H>,
    picker: &mut ScriptedPicker,
    events: Vec<egui::Event>,
) -> egui::FullOutput {
    let input = egui::RawInput {
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            show_options_panel(ui, controller, picker);
        });
    })
}

/// Center of the first painted text equal to `label`.
fn find_text(output: &egui::FullOutput, label: &str) -> Option<egui::Pos2> {
    fn search(shape: &egui::Shape, label: &str) -> Option<egui::Pos2> {
        match shape {
            egui::Shape::Text(text) if text.galley.text() == label => {
                Some(text.visual_bounding_rect().center())
            }
            egui::Shape::Vec(shapes) => shapes.iter().find_map(|s| search(s, label)),
            _ => None,
        }
    }
    output
        .shapes
        .iter()
        .find_map(|clipped| search(&clipped.shape, label))
}

fn press(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

#[test]
fn test_rendering_without_input_commits_nothing() {
    let ctx = egui::Context::default();
    let mut controller = initialized_controller(&sample_configuration());
    let mut picker = ScriptedPicker::default();

    for _ in 0..3 {
        let _ = render_frame(&ctx, &mut controller, &mut picker);
    }

    assert_eq!(applied_count(&controller), 0);
    assert!(picker.seen.is_empty());
    assert_eq!(controller.current_configuration(), sample_configuration());
}

#[test]
fn test_rendering_every_mode() {
    let ctx = egui::Context::default();
    let mut picker = ScriptedPicker::default();

    for mode in IconizerMode::all() {
        for use_tab_colors in [false, true] {
            let config = sample_configuration()
                .with_mode(*mode)
                .with_use_tab_colors(use_tab_colors);
            let mut controller = initialized_controller(&config);
            let _ = render_frame(&ctx, &mut controller, &mut picker);
            assert_eq!(applied_count(&controller), 0, "{mode:?}");
        }
    }
}

#[test]
fn test_rendering_invalid_rows() {
    let ctx = egui::Context::default();
    let mut controller = initialized_controller(&IconizerConfiguration::default());
    controller.set_mode(IconizerMode::IconOnly);
    controller.set_use_tab_colors(true);
    let index = controller.add_tab_color_row();
    controller.set_row_color_text(index, "#xyz");
    let commits = applied_count(&controller);

    let mut picker = ScriptedPicker::default();
    let _ = render_frame(&ctx, &mut controller, &mut picker);

    assert_eq!(applied_count(&controller), commits);
    assert_eq!(controller.table().len(), 1);
}

#[test]
fn test_large_loaded_spacing_survives_rendering() {
    let ctx = egui::Context::default();
    let config = sample_configuration().with_spacing(100.0, 250.0, 72.5);
    let mut controller = initialized_controller(&config);
    let mut picker = ScriptedPicker::default();

    for _ in 0..2 {
        let _ = render_frame(&ctx, &mut controller, &mut picker);
    }

    assert_eq!(applied_count(&controller), 0);
    assert_eq!(controller.horizontal_spacing(), 100.0);
    assert_eq!(controller.vertical_spacing(), 250.0);
    assert_eq!(controller.icon_text_spacing(), 72.5);
}

#[test]
fn test_add_button_click_commits_new_row() {
    let ctx = egui::Context::default();
    let mut controller = initialized_controller(&sample_configuration());
    let mut picker = ScriptedPicker::default();

    // Let grid column widths settle before reading positions
    let mut output = render_frame(&ctx, &mut controller, &mut picker);
    for _ in 0..2 {
        output = render_frame(&ctx, &mut controller, &mut picker);
    }
    let pos = find_text(&output, "Add tab color").expect("add button is painted");

    let _ = render_frame_with(
        &ctx,
        &mut controller,
        &mut picker,
        vec![egui::Event::PointerMoved(pos)],
    );
    let _ = render_frame_with(&ctx, &mut controller, &mut picker, vec![press(pos, true)]);
    let _ = render_frame_with(&ctx, &mut controller, &mut picker, vec![press(pos, false)]);

    assert_eq!(controller.table().len(), 3);
    assert_eq!(applied_count(&controller), 1);
    // The blank row is not committed until it is filled in
    assert_eq!(last_applied(&controller).unwrap().tab_colors.len(), 2);
}
