//! Tab iconizer settings surface.
//!
//! Re-exports the configuration crate and the settings UI crate under one
//! name so hosts depend on a single package:
//!
//! - [`config`]: the [`IconizerConfiguration`] snapshot, display modes, the
//!   tab color codec and the case-insensitive override map
//! - [`settings_ui`]: the options controller, visibility rules, the tab color
//!   grid model and the egui options panel

pub use iconizer_config as config;
pub use iconizer_settings_ui as settings_ui;

pub use iconizer_config::{IconizerConfiguration, IconizerMode, TabColor, TabColors};
pub use iconizer_settings_ui::{
    ColorPicker, OptionPageHost, OptionsController, SettingsError, show_options_panel,
};
