//! Tests for the options panel visibility rules

use iconizer::config::IconizerMode;
use iconizer::settings_ui::{LayoutRow, OptionControl, RowSize, compute_layout};

#[test]
fn test_default_mode_collapses_everything_but_mode_selector() {
    for use_tab_colors in [false, true] {
        let decision = compute_layout(IconizerMode::Default, use_tab_colors);
        for row in LayoutRow::ALL {
            let expected = if row == LayoutRow::Mode {
                RowSize::Shown
            } else {
                RowSize::Collapsed
            };
            assert_eq!(
                decision.size(row),
                expected,
                "{row:?} with use_tab_colors={use_tab_colors}"
            );
        }
    }
}

#[test]
fn test_icon_and_text_with_tab_colors() {
    let decision = compute_layout(IconizerMode::IconAndText, true);
    assert_eq!(decision.size(LayoutRow::IconTextSpacing), RowSize::Shown);
    assert_eq!(decision.size(LayoutRow::RotateIcons), RowSize::Shown);
    assert_eq!(decision.size(LayoutRow::TabColorsEditor), RowSize::AutoSize);
}

#[test]
fn test_icon_only_without_tab_colors() {
    let decision = compute_layout(IconizerMode::IconOnly, false);
    assert_eq!(decision.size(LayoutRow::IconTextSpacing), RowSize::Collapsed);
    assert_eq!(decision.size(LayoutRow::RotateIcons), RowSize::Shown);
    assert_eq!(decision.size(LayoutRow::TabColorsEditor), RowSize::Collapsed);
}

#[test]
fn test_text_only_hides_icon_rows() {
    let decision = compute_layout(IconizerMode::TextOnly, true);
    assert_eq!(decision.size(LayoutRow::IconTextSpacing), RowSize::Collapsed);
    assert_eq!(decision.size(LayoutRow::RotateIcons), RowSize::Collapsed);
    assert_eq!(decision.size(LayoutRow::TabColorsEditor), RowSize::AutoSize);
}

#[test]
fn test_enabled_modes_always_show_margins_and_checkbox() {
    for mode in IconizerMode::all().iter().filter(|m| m.is_enabled()) {
        for use_tab_colors in [false, true] {
            let decision = compute_layout(*mode, use_tab_colors);
            for row in [
                LayoutRow::Mode,
                LayoutRow::HorizontalMargin,
                LayoutRow::VerticalMargin,
                LayoutRow::TabColorsCheckbox,
            ] {
                assert_eq!(decision.size(row), RowSize::Shown, "{mode:?} {row:?}");
            }
        }
    }
}

#[test]
fn test_rotate_row_follows_capability_table() {
    for mode in IconizerMode::all().iter().filter(|m| m.is_enabled()) {
        let decision = compute_layout(*mode, false);
        assert_eq!(
            decision.size(LayoutRow::RotateIcons).is_visible(),
            mode.capabilities().shows_icon,
            "{mode:?}"
        );
    }
}

#[test]
fn test_controls_track_their_rows() {
    let decision = compute_layout(IconizerMode::IconOnly, true);
    for control in OptionControl::ALL {
        assert_eq!(
            decision.is_control_visible(control),
            decision.size(control.row()) != RowSize::Collapsed,
            "{control:?}"
        );
    }
    assert!(!decision.is_control_visible(OptionControl::IconTextSpacingInput));
    assert!(decision.is_control_visible(OptionControl::TabColorsGrid));
    assert!(decision.is_control_visible(OptionControl::AddTabColorButton));
}
