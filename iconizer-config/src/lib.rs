//! Configuration system for the tab iconizer.
//!
//! This crate holds the pure data side of the settings surface:
//!
//! - The immutable [`IconizerConfiguration`] snapshot exchanged with the host
//! - Display modes and their capability table
//! - The [`TabColor`] value and its text codec
//! - The case-insensitive [`TabColors`] override map
//!
//! It has no UI dependencies; the settings panel lives in
//! `iconizer-settings-ui`.

pub mod color;
pub mod configuration;
pub mod defaults;
pub mod error;
pub mod tab_colors;
mod types;

// Re-export main types for convenience
pub use color::{TabColor, decode, encode};
pub use configuration::IconizerConfiguration;
pub use error::{ColorParseError, ConfigError};
pub use tab_colors::TabColors;
pub use types::{IconizerMode, ModeCapabilities};
