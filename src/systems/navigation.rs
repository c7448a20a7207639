//! Navigation system
//!
//! Bridges window events and the presentation:
//! - Window events are translated into navigation input
//! - Input is dispatched to the presentation's listeners
//! - The pointer layout follows the mounted slide's section count

use thermdeck_core::{InputEvent, NavCommand, NavEvent, Presentation};
use thermdeck_input::EventTranslator;
use winit::event::WindowEvent;

use crate::config::NavigationConfig;

/// Drives a [`Presentation`] from window input
pub struct NavigationSystem {
    presentation: Presentation,
    translator: EventTranslator,
}

impl NavigationSystem {
    /// Wrap a presentation for a window of the given physical size
    ///
    /// Applies the configured mode and walks to the configured start slide.
    pub fn new(
        presentation: Presentation,
        config: &NavigationConfig,
        width: u32,
        height: u32,
        scale_factor: f64,
    ) -> Self {
        let translator = EventTranslator::new(width, height, presentation.total_slides())
            .with_invert_wheel(config.invert_wheel)
            .with_scale_factor(scale_factor);

        let mut system = Self {
            presentation: presentation.with_mode(config.initial_mode),
            translator,
        };

        if config.start_slide > 0 {
            let moved = system
                .presentation
                .apply(NavCommand::GoToSlide(config.start_slide));
            if !moved {
                log::warn!(
                    "Start slide {} is outside the deck ({} slides), starting at 1",
                    config.start_slide + 1,
                    system.presentation.total_slides()
                );
            }
        }
        system.sync();
        system
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn translator(&self) -> &EventTranslator {
        &self.translator
    }

    /// Handle a window event
    ///
    /// Returns true when the navigation state changed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match self.translator.translate(event) {
            Some(input) => self.handle_input(input),
            None => false,
        }
    }

    /// Dispatch one navigation input to the presentation
    ///
    /// Returns true when the navigation state changed.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        let dispatch = self.presentation.dispatch(&input);
        if dispatch.suppress_default {
            log::trace!("{:?} consumed by the presentation", input);
        }
        let synced = self.sync();
        dispatch.changed || synced
    }

    /// Drain navigation events, keeping the pointer layout current
    fn sync(&mut self) -> bool {
        let events = self.presentation.drain_events();
        for event in &events {
            log::trace!("{:?}", event);
        }

        if events.iter().any(|e| matches!(e, NavEvent::Mounted { .. })) {
            self.translator
                .set_section_count(self.presentation.section_count());
        }
        !events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermdeck_core::{ClickTarget, Deck, Key, NavigationMode, SlideSpec};

    fn make_deck() -> Deck {
        Deck::new("Test Deck")
            .with_slide(
                SlideSpec::new("a", "A")
                    .with_section("A1")
                    .with_section("A2"),
            )
            .with_slide(
                SlideSpec::new("b", "B")
                    .with_section("B1")
                    .with_section("B2")
                    .with_section("B3"),
            )
            .with_slide(SlideSpec::new("end", "End"))
    }

    fn make_system(config: &NavigationConfig) -> NavigationSystem {
        let presentation = Presentation::new(make_deck()).unwrap();
        NavigationSystem::new(presentation, config, 1280, 720, 1.0)
    }

    #[test]
    fn test_defaults() {
        let system = make_system(&NavigationConfig::default());
        assert_eq!(system.presentation().current_slide(), 0);
        assert_eq!(system.presentation().mode(), NavigationMode::Section);
        assert!(system.presentation().events().is_empty());
    }

    #[test]
    fn test_start_slide_and_mode_from_config() {
        let config = NavigationConfig {
            initial_mode: NavigationMode::Slide,
            start_slide: 1,
            ..Default::default()
        };
        let system = make_system(&config);
        assert_eq!(system.presentation().current_slide(), 1);
        assert_eq!(system.presentation().current_section(), Some(0));
        assert_eq!(system.presentation().mode(), NavigationMode::Slide);
    }

    #[test]
    fn test_start_slide_out_of_range() {
        let config = NavigationConfig {
            start_slide: 10,
            ..Default::default()
        };
        let system = make_system(&config);
        assert_eq!(system.presentation().current_slide(), 0);
    }

    #[test]
    fn test_section_strip_follows_mounted_slide() {
        let mut system = make_system(&NavigationConfig::default());
        let strip = system.translator().layout().section_strip().unwrap();
        let bottom = (strip.x + 1.0, strip.y + strip.height - 1.0);
        assert_eq!(
            system.translator().layout().hit_test(bottom.0, bottom.1),
            Some(ClickTarget::SectionIndicator(1))
        );

        assert!(system.handle_input(InputEvent::Click(ClickTarget::NextButton)));
        assert_eq!(
            system.translator().layout().hit_test(bottom.0, bottom.1),
            Some(ClickTarget::SectionIndicator(2))
        );

        system.handle_input(InputEvent::Click(ClickTarget::ProgressDot(2)));
        assert!(system.translator().layout().section_strip().is_none());
    }

    #[test]
    fn test_scale_factor_applies_to_layout() {
        let presentation = Presentation::new(make_deck()).unwrap();
        let system =
            NavigationSystem::new(presentation, &NavigationConfig::default(), 2560, 1440, 2.0);
        assert_eq!(system.translator().layout().previous_button().width, 100.0);
    }

    #[test]
    fn test_unchanged_input_reports_false() {
        let mut system = make_system(&NavigationConfig::default());
        assert!(!system.handle_input(InputEvent::Click(ClickTarget::PreviousButton)));
        assert!(system.handle_input(InputEvent::KeyDown(Key::Tab)));
        assert!(system.handle_input(InputEvent::KeyDown(Key::Space)));
    }
}
