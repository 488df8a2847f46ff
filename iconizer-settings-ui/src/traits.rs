//! Trait definitions for the options panel's collaborators.
//!
//! The host application implements these to receive committed settings and
//! to provide a color dialog. The panel never depends on a concrete host.

use iconizer_config::IconizerConfiguration;

/// The options page that owns persistence.
///
/// Implemented by the host to receive every committed user change.
pub trait OptionPageHost {
    /// Take a fresh configuration snapshot. No acknowledgement is expected.
    fn apply(&mut self, configuration: IconizerConfiguration);
}

/// Modal color selection.
///
/// Colors cross this boundary as unmultiplied `[r, g, b, a]`.
pub trait ColorPicker {
    /// Show the picker seeded with `initial`; `None` means the user cancelled.
    fn pick_color(&mut self, initial: [u8; 4]) -> Option<[u8; 4]>;
}
