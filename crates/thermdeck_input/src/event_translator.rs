//! Translation of window events into navigation input
//!
//! Inputs:
//! - ArrowLeft/ArrowRight, Space, Backspace, Tab: key presses (repeats included)
//! - Mouse wheel: converted to a browser-style vertical delta
//! - Left click: hit-tested against the controls layout at the last cursor position

use thermdeck_core::{InputEvent, Key};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::layout::ControlsLayout;

/// Pixels per wheel line, for line-based scroll deltas
const LINE_HEIGHT: f64 = 100.0;

/// Map a physical key to a navigation key
pub fn map_key(key: KeyCode) -> Option<Key> {
    match key {
        KeyCode::ArrowLeft => Some(Key::ArrowLeft),
        KeyCode::ArrowRight => Some(Key::ArrowRight),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

/// Convert a winit scroll delta to browser convention (positive = scroll down)
///
/// winit reports positive `y` when the wheel moves away from the user.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => -pos.y,
    }
}

/// Stateful translator from window events to [`InputEvent`]s
pub struct EventTranslator {
    layout: ControlsLayout,
    cursor: Option<(f64, f64)>,
    width: f64,
    height: f64,
    scale: f64,
    total_slides: usize,
    section_count: usize,
    invert_wheel: bool,
}

impl EventTranslator {
    /// Create a translator for a window of the given physical size
    pub fn new(width: u32, height: u32, total_slides: usize) -> Self {
        let (width, height) = (width as f64, height as f64);
        Self {
            layout: ControlsLayout::new(width, height, 1.0, total_slides, 0),
            cursor: None,
            width,
            height,
            scale: 1.0,
            total_slides,
            section_count: 0,
            invert_wheel: false,
        }
    }

    /// Builder: invert the wheel direction
    pub fn with_invert_wheel(mut self, invert: bool) -> Self {
        self.invert_wheel = invert;
        self
    }

    /// Builder: set the window scale factor
    pub fn with_scale_factor(mut self, scale: f64) -> Self {
        self.scale = scale;
        self.relayout();
        self
    }

    pub fn layout(&self) -> &ControlsLayout {
        &self.layout
    }

    /// Last known cursor position (physical pixels)
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Window resized
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
        self.relayout();
    }

    /// Window moved to a display with a different scale factor
    pub fn set_scale_factor(&mut self, scale: f64) {
        self.scale = scale;
        self.relayout();
    }

    /// The mounted slide changed; the section strip follows its section count
    pub fn set_section_count(&mut self, section_count: usize) {
        if self.section_count != section_count {
            self.section_count = section_count;
            self.relayout();
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Key press or release
    pub fn key(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        map_key(key).map(InputEvent::KeyDown)
    }

    /// Wheel movement at the current cursor position
    pub fn wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let mut delta_y = wheel_delta_y(delta);
        if self.invert_wheel {
            delta_y = -delta_y;
        }
        let over_content = self
            .cursor
            .map(|(x, y)| self.layout.over_content(x, y))
            .unwrap_or(false);
        Some(InputEvent::Wheel { delta_y, over_content })
    }

    /// Mouse button press or release
    pub fn mouse_button(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        let (x, y) = self.cursor?;
        let target = self.layout.hit_test(x, y);
        if target.is_none() {
            log::trace!("Click at ({:.0}, {:.0}) hit no control", x, y);
        }
        target.map(InputEvent::Click)
    }

    /// Translate a window event, updating pointer and layout state
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        let input = self.translate_inner(event);
        if let Some(input) = &input {
            log::trace!("Translated input: {:?}", input);
        }
        input
    }

    fn translate_inner(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.key(code, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::MouseWheel { delta, .. } => self.wheel(*delta),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                None
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }
            _ => None,
        }
    }

    fn relayout(&mut self) {
        self.layout = ControlsLayout::new(
            self.width,
            self.height,
            self.scale,
            self.total_slides,
            self.section_count,
        );
    }
}
