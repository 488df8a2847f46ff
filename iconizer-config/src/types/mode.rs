//! Tab decoration display modes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Display Mode
// ============================================================================

/// How tool window tabs are decorated.
///
/// `Default` leaves tabs untouched; every other mode turns decoration on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconizerMode {
    /// Decoration off, tabs keep their stock appearance
    #[default]
    Default,
    /// Replace the tab caption with its icon
    IconOnly,
    /// Show the icon followed by the caption
    IconAndText,
    /// Keep the caption only, restyled with spacing and colors
    TextOnly,
}

/// What a mode puts on a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeCapabilities {
    pub shows_icon: bool,
    pub shows_text: bool,
}

// Indexed by `IconizerMode as usize`.
const MODE_CAPABILITIES: [ModeCapabilities; 4] = [
    // Default
    ModeCapabilities {
        shows_icon: false,
        shows_text: true,
    },
    // IconOnly
    ModeCapabilities {
        shows_icon: true,
        shows_text: false,
    },
    // IconAndText
    ModeCapabilities {
        shows_icon: true,
        shows_text: true,
    },
    // TextOnly
    ModeCapabilities {
        shows_icon: false,
        shows_text: true,
    },
];

impl IconizerMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            IconizerMode::Default => "Default (off)",
            IconizerMode::IconOnly => "Icon only",
            IconizerMode::IconAndText => "Icon and text",
            IconizerMode::TextOnly => "Text only",
        }
    }

    /// All available modes for UI iteration
    pub fn all() -> &'static [IconizerMode] {
        &[
            IconizerMode::Default,
            IconizerMode::IconOnly,
            IconizerMode::IconAndText,
            IconizerMode::TextOnly,
        ]
    }

    pub fn capabilities(&self) -> ModeCapabilities {
        MODE_CAPABILITIES[*self as usize]
    }

    /// Returns true if the mode shows an icon on the tab
    pub fn shows_icon(&self) -> bool {
        self.capabilities().shows_icon
    }

    /// Returns true for every mode that decorates tabs at all
    pub fn is_enabled(&self) -> bool {
        *self != IconizerMode::Default
    }
}
