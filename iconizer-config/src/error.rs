//! Typed error variants for the iconizer-config crate.
//!
//! Color text that fails to decode is reported through [`ColorParseError`];
//! configuration snapshots that break a field constraint are reported through
//! [`ConfigError`]. Callers match on the variants instead of opaque strings.

use thiserror::Error;

/// Error returned when a piece of color text cannot be decoded.
///
/// The settings UI never surfaces this to the host: a failed decode only marks
/// the owning tab color row as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The text is neither a supported hex form nor a known color name.
    ///
    /// The inner string is the rejected input, untrimmed.
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),
}

/// Errors produced when a configuration snapshot fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the rejected value.
    #[error("Config validation error: {0}")]
    Validation(String),
}
