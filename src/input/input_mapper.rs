//! Host key mapping
//!
//! Maps keyboard input to actions the window host handles itself.
//! Navigation keys (arrows, Space, Backspace, Tab) are NOT mapped here - they
//! go to the presentation through the event translator.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions handled by the host rather than the presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Close the window (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw key events to host actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and for every key the presentation owns.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}
