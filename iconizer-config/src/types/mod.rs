//! Enumerated configuration types.

mod mode;

pub use mode::{IconizerMode, ModeCapabilities};
