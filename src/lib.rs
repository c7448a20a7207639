//! thermdeck - slide deck navigation host
//!
//! Library half of the binary, exposing the configuration and the host
//! systems so they can be tested outside the event loop.

pub mod config;
pub mod input;
pub mod systems;
