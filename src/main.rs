//! thermdeck - presentation navigation host
//!
//! Opens a window, feeds its input to the deck's navigation controller, and
//! shows the navigation state in the title bar.

use std::process::ExitCode;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use thermdeck::config::AppConfig;
use thermdeck::input::{InputAction, InputMapper};
use thermdeck::systems::{NavigationSystem, WindowSystem};
use thermdeck_core::{Deck, DeckError, Presentation};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    /// Created once the window size is known
    navigation: Option<NavigationSystem>,
    /// Held until the window exists
    presentation: Option<Presentation>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, DeckError> {
        let deck = Deck::load(&config.deck.path)?;
        log::info!(
            "Loaded deck '{}' from {} ({} slides)",
            deck.title,
            config.deck.path,
            deck.len()
        );
        let presentation = Presentation::new(deck)?;

        Ok(Self {
            config,
            window: None,
            navigation: None,
            presentation: Some(presentation),
        })
    }

    fn refresh_title(&self) {
        if let (Some(window), Some(navigation)) = (&self.window, &self.navigation) {
            window.update_title(navigation.presentation());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        if let Some(presentation) = self.presentation.take() {
            let size = window.window().inner_size();
            self.navigation = Some(NavigationSystem::new(
                presentation,
                &self.config.navigation,
                size.width,
                size.height,
                window.window().scale_factor(),
            ));
        }

        self.window = Some(window);
        self.refresh_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(key) = key_event.physical_key {
                    match InputMapper::map_keyboard(key, key_event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                            return;
                        }
                        None => {}
                    }
                }
            }
            _ => {}
        }

        let changed = self
            .navigation
            .as_mut()
            .map(|navigation| navigation.handle_window_event(&event))
            .unwrap_or(false);
        if changed {
            self.refresh_title();
        }
    }
}

fn main() -> ExitCode {
    // Config first so it can pick the log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting thermdeck");

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to load deck: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
