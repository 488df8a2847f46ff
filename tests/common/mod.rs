//! Shared integration test helpers for the iconizer.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{RecordingHost, ScriptedPicker, sample_configuration};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use std::collections::VecDeque;

use iconizer::config::{IconizerConfiguration, IconizerMode, TabColor, TabColors};
use iconizer::{ColorPicker, OptionPageHost, OptionsController};

pub const RED: TabColor = TabColor::rgb(0xFF, 0x00, 0x00);
pub const GREEN: TabColor = TabColor::rgb(0x00, 0xFF, 0x00);
pub const BLUE: TabColor = TabColor::rgb(0x00, 0x00, 0xFF);

/// Host that records every applied snapshot.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub applied: Vec<IconizerConfiguration>,
}

impl OptionPageHost for RecordingHost {
    fn apply(&mut self, configuration: IconizerConfiguration) {
        self.applied.push(configuration);
    }
}

/// Picker that replays queued answers and records what it was seeded with.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    pub answers: VecDeque<Option<[u8; 4]>>,
    pub seen: Vec<[u8; 4]>,
}

impl ScriptedPicker {
    pub fn answering(answers: impl IntoIterator<Item = Option<[u8; 4]>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            seen: Vec::new(),
        }
    }
}

impl ColorPicker for ScriptedPicker {
    fn pick_color(&mut self, initial: [u8; 4]) -> Option<[u8; 4]> {
        self.seen.push(initial);
        self.answers.pop_front().flatten()
    }
}

/// Icon-and-text configuration with two overrides and tab colors on.
pub fn sample_configuration() -> IconizerConfiguration {
    let colors: TabColors = [("Output", RED), ("Error List", BLUE)]
        .into_iter()
        .collect();
    IconizerConfiguration::default()
        .with_mode(IconizerMode::IconAndText)
        .with_spacing(8.0, 2.5, 5.0)
        .with_rotate_vertical_tab_icons(false)
        .with_use_tab_colors(true)
        .with_tab_colors(colors)
}

/// Controller initialized with `configuration` and a fresh recording host.
pub fn initialized_controller(
    configuration: &IconizerConfiguration,
) -> OptionsController<RecordingHost> {
    let mut controller = OptionsController::new();
    controller
        .initialize(Some(RecordingHost::default()), Some(configuration))
        .expect("initialize should succeed");
    controller
}

/// Number of snapshots the controller's host has received.
pub fn applied_count(controller: &OptionsController<RecordingHost>) -> usize {
    controller.host().map_or(0, |host| host.applied.len())
}

/// Most recent snapshot the host received.
pub fn last_applied(controller: &OptionsController<RecordingHost>) -> Option<&IconizerConfiguration> {
    controller.host().and_then(|host| host.applied.last())
}
