//! The `IconizerConfiguration` snapshot exchanged with the host.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tab_colors::TabColors;
use crate::types::IconizerMode;

static EMPTY_TAB_COLORS: LazyLock<Arc<TabColors>> = LazyLock::new(|| Arc::new(TabColors::new()));

/// Immutable settings snapshot for tab decoration.
///
/// Snapshots are plain values: the settings panel builds a fresh one for every
/// committed change and hands it to the host, which owns persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconizerConfiguration {
    #[serde(default)]
    pub mode: IconizerMode,

    /// Extra space left and right of each tab caption
    #[serde(default = "crate::defaults::horizontal_spacing")]
    pub horizontal_spacing: f64,

    /// Extra space above and below each tab caption
    #[serde(default = "crate::defaults::vertical_spacing")]
    pub vertical_spacing: f64,

    /// Gap between the icon and the caption (icon-and-text mode only)
    #[serde(default = "crate::defaults::icon_text_spacing")]
    pub icon_text_spacing: f64,

    /// Rotate icons on tabs docked to the left or right edge
    #[serde(default = "crate::defaults::rotate_vertical_tab_icons")]
    pub rotate_vertical_tab_icons: bool,

    #[serde(default)]
    pub use_tab_colors: bool,

    /// Color overrides keyed by tab caption, case-insensitive
    #[serde(default = "crate::defaults::tab_colors")]
    pub tab_colors: Arc<TabColors>,
}

impl Default for IconizerConfiguration {
    fn default() -> Self {
        Self {
            mode: IconizerMode::default(),
            horizontal_spacing: crate::defaults::horizontal_spacing(),
            vertical_spacing: crate::defaults::vertical_spacing(),
            icon_text_spacing: crate::defaults::icon_text_spacing(),
            rotate_vertical_tab_icons: crate::defaults::rotate_vertical_tab_icons(),
            use_tab_colors: false,
            tab_colors: crate::defaults::tab_colors(),
        }
    }
}

impl IconizerConfiguration {
    pub fn new(
        mode: IconizerMode,
        horizontal_spacing: f64,
        vertical_spacing: f64,
        icon_text_spacing: f64,
        rotate_vertical_tab_icons: bool,
        use_tab_colors: bool,
        tab_colors: Arc<TabColors>,
    ) -> Self {
        Self {
            mode,
            horizontal_spacing,
            vertical_spacing,
            icon_text_spacing,
            rotate_vertical_tab_icons,
            use_tab_colors,
            tab_colors,
        }
    }

    /// The shared "no overrides" mapping. Every call returns the same `Arc`.
    pub fn empty_tab_colors() -> Arc<TabColors> {
        Arc::clone(&EMPTY_TAB_COLORS)
    }

    /// Wrap a map for storage, reusing the shared instance when it is empty.
    pub fn share_tab_colors(colors: TabColors) -> Arc<TabColors> {
        if colors.is_empty() {
            Self::empty_tab_colors()
        } else {
            Arc::new(colors)
        }
    }

    pub fn with_mode(mut self, mode: IconizerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_spacing(mut self, horizontal: f64, vertical: f64, icon_text: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self.icon_text_spacing = icon_text;
        self
    }

    pub fn with_rotate_vertical_tab_icons(mut self, rotate: bool) -> Self {
        self.rotate_vertical_tab_icons = rotate;
        self
    }

    pub fn with_use_tab_colors(mut self, use_tab_colors: bool) -> Self {
        self.use_tab_colors = use_tab_colors;
        self
    }

    pub fn with_tab_colors(mut self, tab_colors: TabColors) -> Self {
        self.tab_colors = Self::share_tab_colors(tab_colors);
        self
    }

    /// Check that every spacing is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spacings = [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("icon_text_spacing", self.icon_text_spacing),
        ];
        for (field, value) in spacings {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{field} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
