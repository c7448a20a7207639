//! Input handling for thermdeck
//!
//! This crate turns `winit` window events into the platform-neutral
//! navigation input of `thermdeck_core`, hit-testing clicks against the
//! on-screen controls layout.

mod event_translator;
mod layout;

pub use event_translator::{map_key, wheel_delta_y, EventTranslator};
pub use layout::{ControlsLayout, Rect};
