//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the status title.

use thermdeck_core::Presentation;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Status line for the window title
///
/// `CPU Thermal Management - 2/6 Heat Impact: Thermal Throttling [2/5] (section mode) ◀ ■▣□□□□ ▶`
pub fn format_title(presentation: &Presentation) -> String {
    let spec = presentation.current_spec();
    let position = format!(
        "{}/{}",
        presentation.current_slide() + 1,
        presentation.total_slides()
    );

    let indicators = presentation.section_indicators();
    let slide = match indicators
        .iter()
        .position(|active| *active)
        .and_then(|i| spec.section_title(i).map(|title| (i, title)))
    {
        Some((index, section)) => format!(
            "{}: {} [{}/{}]",
            spec.title,
            section,
            index + 1,
            indicators.len()
        ),
        None => spec.title.clone(),
    };

    format!(
        "{} - {} {} ({} mode) {}",
        presentation.deck().title,
        position,
        slide,
        presentation.mode().label(),
        presentation.controls_state().status_line()
    )
}

/// Owns the application window
pub struct WindowSystem {
    window: Window,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Toggle borderless fullscreen
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        log::debug!("Fullscreen: {}", if new_fullscreen.is_some() { "ON" } else { "OFF" });
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the presentation status in the title bar
    pub fn update_title(&self, presentation: &Presentation) {
        self.window.set_title(&format_title(presentation));
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
