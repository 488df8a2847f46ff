//! Typed errors for the options controller.

use iconizer_config::ConfigError;
use thiserror::Error;

/// Structural failures of the options controller.
///
/// Data-quality problems in the tab color grid (bad color text, duplicate
/// captions) are never reported here; they only affect row validity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `initialize` was called on a controller that already has a host.
    #[error("Options controller is already initialized")]
    AlreadyInitialized,

    /// A required argument was absent or a configuration failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ConfigError> for SettingsError {
    fn from(e: ConfigError) -> Self {
        SettingsError::InvalidArgument(e.to_string())
    }
}
