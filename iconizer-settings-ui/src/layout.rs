//! Row visibility for the options panel.
//!
//! [`compute_layout`] is a pure function of the display mode and the
//! "use tab colors" flag. Nothing here holds state, so the controller calls it
//! on every change.

use iconizer_config::IconizerMode;

/// Fixed height of a shown row, in points.
pub const ROW_HEIGHT: f32 = 27.0;

/// Logical rows of the options panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutRow {
    Mode,
    HorizontalMargin,
    VerticalMargin,
    IconTextSpacing,
    RotateIcons,
    TabColorsCheckbox,
    TabColorsEditor,
}

impl LayoutRow {
    pub const ALL: [LayoutRow; 7] = [
        LayoutRow::Mode,
        LayoutRow::HorizontalMargin,
        LayoutRow::VerticalMargin,
        LayoutRow::IconTextSpacing,
        LayoutRow::RotateIcons,
        LayoutRow::TabColorsCheckbox,
        LayoutRow::TabColorsEditor,
    ];
}

/// Size outcome for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSize {
    /// Zero height, controls hidden
    Collapsed,
    /// Fixed [`ROW_HEIGHT`]
    Shown,
    /// Grows to fit its content (the tab color grid)
    AutoSize,
}

impl RowSize {
    pub fn is_visible(&self) -> bool {
        !matches!(self, RowSize::Collapsed)
    }

    /// Absolute height, or `None` when the row sizes to its content.
    pub fn height(&self) -> Option<f32> {
        match self {
            RowSize::Collapsed => Some(0.0),
            RowSize::Shown => Some(ROW_HEIGHT),
            RowSize::AutoSize => None,
        }
    }
}

/// Individual controls of the options panel and the row each one occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionControl {
    ModeLabel,
    ModeSelector,
    HorizontalMarginLabel,
    HorizontalMarginInput,
    VerticalMarginLabel,
    VerticalMarginInput,
    IconTextSpacingLabel,
    IconTextSpacingInput,
    RotateIconsCheckbox,
    UseTabColorsCheckbox,
    TabColorsGrid,
    AddTabColorButton,
}

impl OptionControl {
    pub const ALL: [OptionControl; 12] = [
        OptionControl::ModeLabel,
        OptionControl::ModeSelector,
        OptionControl::HorizontalMarginLabel,
        OptionControl::HorizontalMarginInput,
        OptionControl::VerticalMarginLabel,
        OptionControl::VerticalMarginInput,
        OptionControl::IconTextSpacingLabel,
        OptionControl::IconTextSpacingInput,
        OptionControl::RotateIconsCheckbox,
        OptionControl::UseTabColorsCheckbox,
        OptionControl::TabColorsGrid,
        OptionControl::AddTabColorButton,
    ];

    pub fn row(&self) -> LayoutRow {
        match self {
            OptionControl::ModeLabel | OptionControl::ModeSelector => LayoutRow::Mode,
            OptionControl::HorizontalMarginLabel | OptionControl::HorizontalMarginInput => {
                LayoutRow::HorizontalMargin
            }
            OptionControl::VerticalMarginLabel | OptionControl::VerticalMarginInput => {
                LayoutRow::VerticalMargin
            }
            OptionControl::IconTextSpacingLabel | OptionControl::IconTextSpacingInput => {
                LayoutRow::IconTextSpacing
            }
            OptionControl::RotateIconsCheckbox => LayoutRow::RotateIcons,
            OptionControl::UseTabColorsCheckbox => LayoutRow::TabColorsCheckbox,
            OptionControl::TabColorsGrid | OptionControl::AddTabColorButton => {
                LayoutRow::TabColorsEditor
            }
        }
    }
}

/// Per-row size outcome for one (mode, use-tab-colors) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDecision {
    horizontal_margin: RowSize,
    vertical_margin: RowSize,
    icon_text_spacing: RowSize,
    rotate_icons: RowSize,
    tab_colors_checkbox: RowSize,
    tab_colors_editor: RowSize,
}

impl LayoutDecision {
    pub fn size(&self, row: LayoutRow) -> RowSize {
        match row {
            LayoutRow::Mode => RowSize::Shown,
            LayoutRow::HorizontalMargin => self.horizontal_margin,
            LayoutRow::VerticalMargin => self.vertical_margin,
            LayoutRow::IconTextSpacing => self.icon_text_spacing,
            LayoutRow::RotateIcons => self.rotate_icons,
            LayoutRow::TabColorsCheckbox => self.tab_colors_checkbox,
            LayoutRow::TabColorsEditor => self.tab_colors_editor,
        }
    }

    pub fn row_height(&self, row: LayoutRow) -> Option<f32> {
        self.size(row).height()
    }

    /// A control is visible exactly when its row is not collapsed.
    pub fn is_control_visible(&self, control: OptionControl) -> bool {
        self.size(control.row()).is_visible()
    }

    pub fn visible_controls(&self) -> impl Iterator<Item = OptionControl> + '_ {
        OptionControl::ALL
            .into_iter()
            .filter(move |control| self.is_control_visible(*control))
    }
}

/// Decide which rows of the options panel are shown.
///
/// `Default` mode turns decoration off, so everything below the mode selector
/// collapses. Otherwise the margins and the tab color checkbox are always
/// shown, icon/text spacing only for icon-and-text, rotation only for modes
/// that show an icon, and the color grid only while tab colors are in use.
pub fn compute_layout(mode: IconizerMode, use_tab_colors: bool) -> LayoutDecision {
    if !mode.is_enabled() {
        return LayoutDecision {
            horizontal_margin: RowSize::Collapsed,
            vertical_margin: RowSize::Collapsed,
            icon_text_spacing: RowSize::Collapsed,
            rotate_icons: RowSize::Collapsed,
            tab_colors_checkbox: RowSize::Collapsed,
            tab_colors_editor: RowSize::Collapsed,
        };
    }

    let shown_if = |condition: bool| {
        if condition {
            RowSize::Shown
        } else {
            RowSize::Collapsed
        }
    };

    LayoutDecision {
        horizontal_margin: RowSize::Shown,
        vertical_margin: RowSize::Shown,
        icon_text_spacing: shown_if(mode == IconizerMode::IconAndText),
        rotate_icons: shown_if(mode.shows_icon()),
        tab_colors_checkbox: RowSize::Shown,
        tab_colors_editor: if use_tab_colors {
            RowSize::AutoSize
        } else {
            RowSize::Collapsed
        },
    }
}
