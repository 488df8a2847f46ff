//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `IconizerConfiguration` fields and by its `Default` impl.

use std::sync::Arc;

use crate::configuration::IconizerConfiguration;
use crate::tab_colors::TabColors;

pub fn horizontal_spacing() -> f64 {
    6.0
}

pub fn vertical_spacing() -> f64 {
    3.0
}

pub fn icon_text_spacing() -> f64 {
    4.0
}

pub fn rotate_vertical_tab_icons() -> bool {
    true
}

pub fn tab_colors() -> Arc<TabColors> {
    IconizerConfiguration::empty_tab_colors()
}
