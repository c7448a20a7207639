//! Application systems
//!
//! Pieces of the host kept out of main.rs so they can be tested without an event loop.

mod navigation;
mod window;

pub use navigation::NavigationSystem;
pub use window::{format_title, WindowError, WindowSystem};
