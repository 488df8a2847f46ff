//! Settings UI for the tab iconizer.
//!
//! This crate provides the options panel that edits an
//! [`IconizerConfiguration`]: the controller that keeps fields and
//! configuration in sync, the tab color grid model, the row visibility rules,
//! and an egui rendering of the panel. It is decoupled from the host
//! application through the [`OptionPageHost`] and [`ColorPicker`] traits.

// Trait interfaces for decoupling from the host
mod traits;
pub use traits::*;

pub mod controller;
pub mod error;
pub mod layout;
pub mod options_panel;
pub mod section;
pub mod suppress;
pub mod tab_color_row;
pub mod tab_color_table;

pub use controller::{ControllerPhase, OptionsController};
pub use error::SettingsError;
pub use layout::{LayoutDecision, LayoutRow, OptionControl, ROW_HEIGHT, RowSize, compute_layout};
pub use options_panel::show_options_panel;
pub use suppress::{ChangeSuppression, SuppressGuard};
pub use tab_color_row::{SwatchStyle, TabColorRow};
pub use tab_color_table::TabColorTable;

// Re-export types that settings consumers need
pub use iconizer_config::{
    self as config, IconizerConfiguration, IconizerMode, TabColor, TabColors,
};
