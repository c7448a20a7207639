//! Input handling module
//!
//! Maps raw key presses to host actions. Navigation input is translated by
//! `thermdeck_input` instead.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
