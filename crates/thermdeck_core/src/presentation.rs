//! Presentation controller
//!
//! The Presentation owns the whole navigation state:
//! - the current slide and the mounted slide's section controller
//! - the navigation mode (one value shared by every listener)
//! - the listener registry, scoped to slide mounts
//!
//! # Example
//! ```ignore
//! let mut presentation = Presentation::new(Deck::load("assets/decks/cpu_thermal.ron")?)?;
//!
//! presentation.dispatch(&InputEvent::KeyDown(Key::Space));
//! for event in presentation.drain_events() {
//!     log::info!("{:?}", event);
//! }
//! ```

use crate::controls::ControlsState;
use crate::deck::{Deck, DeckError, SlideSpec};
use crate::deck_validator::DeckValidator;
use crate::input::{ClickTarget, Dispatch, InputEvent, Key};
use crate::listener::{EventKinds, Listener, ListenerOwner, ListenerRegistry};
use crate::navigation::{
    Direction, EntryPoint, MountId, NavCommand, NavEvent, NavigationMode, TransitionRequest,
};
use crate::section::{SectionController, SectionStep};

/// One mounted slide instance
struct MountedSlide {
    id: MountId,
    slide: usize,
    sections: Option<SectionController>,
}

/// Root navigation controller
///
/// Slide transitions are single steps that unmount the current slide
/// (releasing its listeners) before mounting the destination with a fresh
/// [`MountId`]. Out-of-range requests are ignored.
pub struct Presentation {
    deck: Deck,
    current: usize,
    mode: NavigationMode,
    mounted: MountedSlide,
    listeners: ListenerRegistry,
    next_mount: u64,
    events: Vec<NavEvent>,
}

impl Presentation {
    /// Start a presentation on the first slide of `deck`
    pub fn new(deck: Deck) -> Result<Self, DeckError> {
        DeckValidator::validate_or_error(&deck)?;

        let mut listeners = ListenerRegistry::new();
        listeners.register(Listener::new(
            ListenerOwner::Controls,
            EventKinds::KEYBOARD | EventKinds::CLICK,
        ));

        let mut presentation = Self {
            deck,
            current: 0,
            mode: NavigationMode::default(),
            // Placeholder until the first mount below
            mounted: MountedSlide {
                id: MountId(0),
                slide: 0,
                sections: None,
            },
            listeners,
            next_mount: 0,
            events: Vec::new(),
        };
        presentation.mounted = presentation.mount(0, EntryPoint::FirstSection);

        log::info!(
            "Presentation '{}' started with {} slides",
            presentation.deck.title,
            presentation.deck.len()
        );
        Ok(presentation)
    }

    /// Builder: start in the given navigation mode
    pub fn with_mode(mut self, mode: NavigationMode) -> Self {
        self.mode = mode;
        self
    }

    // --- State access ---

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current slide index
    pub fn current_slide(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.deck.len()
    }

    /// Spec of the current slide
    pub fn current_spec(&self) -> &SlideSpec {
        &self.deck.slides[self.current]
    }

    /// Active section, or `None` when the slide has no sections
    pub fn current_section(&self) -> Option<usize> {
        self.mounted.sections.as_ref().map(|s| s.active())
    }

    /// Number of sections of the current slide
    pub fn section_count(&self) -> usize {
        self.mounted.sections.as_ref().map(|s| s.count()).unwrap_or(0)
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Identity of the current slide mount
    pub fn mount_id(&self) -> MountId {
        self.mounted.id
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.deck.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    /// Button and progress-dot state for the controls
    pub fn controls_state(&self) -> ControlsState {
        ControlsState::new(self.current, self.deck.len())
    }

    /// Active flag per section indicator (empty for slides without sections)
    pub fn section_indicators(&self) -> Vec<bool> {
        self.mounted
            .sections
            .as_ref()
            .map(|s| s.indicators())
            .unwrap_or_default()
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }

    /// Take all recorded events
    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Slide navigation ---

    /// Advance one slide, landing on its first section
    ///
    /// Returns false at the last slide.
    pub fn go_to_next_slide(&mut self) -> bool {
        self.transition(TransitionRequest::forward())
    }

    /// Go back one slide, landing on its first section
    ///
    /// Returns false at the first slide.
    pub fn go_to_previous_slide(&mut self) -> bool {
        self.transition(TransitionRequest::backward())
    }

    /// Walk to `target` one slide at a time
    ///
    /// Every intermediate slide is mounted and unmounted exactly as during
    /// step-by-step navigation. Returns the number of steps taken; an
    /// out-of-range target takes none.
    pub fn go_to_slide(&mut self, target: usize) -> usize {
        if target >= self.deck.len() {
            return 0;
        }

        let mut steps = 0;
        while self.current != target {
            let stepped = if target > self.current {
                self.go_to_next_slide()
            } else {
                self.go_to_previous_slide()
            };
            if !stepped {
                break;
            }
            steps += 1;
        }
        steps
    }

    // --- Section navigation ---

    /// Next section, crossing into the next slide from the last section
    pub fn next_section(&mut self) -> bool {
        let step = match self.mounted.sections.as_mut() {
            Some(sections) => sections.next(),
            None => return false,
        };

        match step {
            SectionStep::Moved { from, to } => {
                self.section_changed(from, to);
                true
            }
            SectionStep::Crossed(request) => {
                if !self.can_go_next() {
                    return false;
                }
                if let Some(sections) = self.mounted.sections.as_mut() {
                    sections.reset();
                }
                self.transition(request)
            }
        }
    }

    /// Previous section, crossing into the previous slide's last section
    /// from the first section
    pub fn previous_section(&mut self) -> bool {
        let step = match self.mounted.sections.as_mut() {
            Some(sections) => sections.previous(),
            None => return false,
        };

        match step {
            SectionStep::Moved { from, to } => {
                self.section_changed(from, to);
                true
            }
            // Dropped along with its entry point when at the first slide
            SectionStep::Crossed(request) => self.transition(request),
        }
    }

    /// Jump to a section of the current slide
    pub fn select_section(&mut self, index: usize) -> bool {
        let from = match self.mounted.sections.as_mut() {
            Some(sections) => sections.select(index),
            None => return false,
        };

        match from {
            Some(from) => {
                self.section_changed(from, index);
                true
            }
            None => false,
        }
    }

    // --- Mode ---

    /// Flip between section and slide mode
    pub fn toggle_mode(&mut self) -> NavigationMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Set the navigation mode
    pub fn set_mode(&mut self, mode: NavigationMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        log::info!("Navigation mode: {}", mode.label());
        self.events.push(NavEvent::ModeChanged(mode));
    }

    // --- Commands and input ---

    /// Apply a navigation command, returning whether anything changed
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::NextSlide => self.go_to_next_slide(),
            NavCommand::PreviousSlide => self.go_to_previous_slide(),
            NavCommand::GoToSlide(target) => self.go_to_slide(target) > 0,
            NavCommand::NextSection => self.next_section(),
            NavCommand::PreviousSection => self.previous_section(),
            NavCommand::SelectSection(index) => self.select_section(index),
            NavCommand::ToggleMode => {
                self.toggle_mode();
                true
            }
        }
    }

    /// Deliver an input event to every live listener subscribed to it
    ///
    /// The listener set is captured before delivery; a listener released by
    /// an earlier handler (because that handler changed slides) is skipped,
    /// and listeners of the newly mounted slide do not see this event.
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        let kind = match event {
            InputEvent::KeyDown(_) => EventKinds::KEYBOARD,
            InputEvent::Wheel { .. } => EventKinds::WHEEL,
            InputEvent::Click(_) => EventKinds::CLICK,
        };

        let recorded = self.events.len();
        let mut suppress_default = false;
        let mut delivered = 0;

        for (key, owner) in self.listeners.subscribed(kind) {
            if !self.listeners.is_live(key) {
                continue;
            }
            delivered += 1;
            suppress_default |= match owner {
                ListenerOwner::Controls => self.handle_controls(event),
                ListenerOwner::Slide(mount) => self.handle_slide(mount, event),
            };
        }

        Dispatch {
            suppress_default,
            changed: self.events.len() > recorded,
            delivered,
        }
    }

    /// Controls listener: Tab, slide-mode arrows, buttons and progress dots
    ///
    /// Returns whether the default action is suppressed.
    fn handle_controls(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown(Key::Tab) => {
                self.toggle_mode();
                true
            }
            InputEvent::KeyDown(Key::ArrowRight) if self.mode == NavigationMode::Slide => {
                self.go_to_next_slide();
                false
            }
            InputEvent::KeyDown(Key::ArrowLeft) if self.mode == NavigationMode::Slide => {
                self.go_to_previous_slide();
                false
            }
            InputEvent::Click(ClickTarget::PreviousButton) => {
                self.go_to_previous_slide();
                false
            }
            InputEvent::Click(ClickTarget::NextButton) => {
                self.go_to_next_slide();
                false
            }
            InputEvent::Click(ClickTarget::ProgressDot(target)) => {
                self.go_to_slide(target);
                false
            }
            _ => false,
        }
    }

    /// Slide listener: section keys, wheel over content, section indicators
    ///
    /// Returns whether the default action is suppressed.
    fn handle_slide(&mut self, mount: MountId, event: &InputEvent) -> bool {
        if mount != self.mounted.id {
            log::warn!("Event for stale mount {} ignored", mount.value());
            return false;
        }

        let section_mode = self.mode == NavigationMode::Section;
        match *event {
            InputEvent::KeyDown(Key::Space) => {
                self.next_section();
                true
            }
            InputEvent::KeyDown(Key::Backspace) => {
                self.previous_section();
                true
            }
            InputEvent::KeyDown(Key::ArrowRight) if section_mode => {
                self.next_section();
                true
            }
            InputEvent::KeyDown(Key::ArrowLeft) if section_mode => {
                self.previous_section();
                true
            }
            InputEvent::Wheel { delta_y, over_content: true } => {
                if delta_y > 0.0 {
                    self.next_section();
                } else if delta_y < 0.0 {
                    self.previous_section();
                }
                true
            }
            InputEvent::Click(ClickTarget::SectionIndicator(index)) => {
                self.select_section(index);
                false
            }
            _ => false,
        }
    }

    // --- Mount lifecycle ---

    /// Perform one slide step
    ///
    /// Unmount always completes before the destination mounts.
    fn transition(&mut self, request: TransitionRequest) -> bool {
        let target = match request.direction {
            Direction::Forward if self.can_go_next() => self.current + 1,
            Direction::Backward if self.can_go_previous() => self.current - 1,
            _ => return false,
        };

        let from = self.current;
        self.unmount();
        self.current = target;

        log::info!(
            "Slide {} -> {} ({})",
            from + 1,
            target + 1,
            self.deck.slides[target].title
        );
        self.events.push(NavEvent::SlideChanged {
            from,
            to: target,
            direction: request.direction,
        });

        self.mounted = self.mount(target, request.entry);
        true
    }

    /// Mount `slide` with a fresh identity, registering its listeners
    fn mount(&mut self, slide: usize, entry: EntryPoint) -> MountedSlide {
        self.next_mount += 1;
        let id = MountId(self.next_mount);
        let sections = SectionController::mount(self.deck.slides[slide].section_count(), entry);

        // Slides without sections have nothing to listen for
        if sections.is_some() {
            let owner = ListenerOwner::Slide(id);
            self.listeners.register(Listener::new(owner, EventKinds::KEYBOARD));
            self.listeners.register(Listener::new(owner, EventKinds::WHEEL));
            self.listeners.register(Listener::new(owner, EventKinds::CLICK));
        }

        let section = sections.as_ref().map(|s| s.active());
        log::debug!(
            "Mounted slide {} as mount {} at section {:?}",
            slide + 1,
            id.value(),
            section.map(|s| s + 1)
        );
        self.events.push(NavEvent::Mounted { mount: id, slide, section });

        MountedSlide { id, slide, sections }
    }

    /// Release the mounted slide's listeners
    fn unmount(&mut self) {
        let id = self.mounted.id;
        let slide = self.mounted.slide;
        let listeners_released = self.listeners.release(ListenerOwner::Slide(id));
        self.mounted.sections = None;

        log::debug!("Unmounted slide {} (mount {})", slide + 1, id.value());
        self.events.push(NavEvent::Unmounted {
            mount: id,
            slide,
            listeners_released,
        });
    }

    fn section_changed(&mut self, from: usize, to: usize) {
        log::debug!("Slide {}: section {} -> {}", self.current + 1, from + 1, to + 1);
        self.events.push(NavEvent::SectionChanged {
            slide: self.current,
            from,
            to,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three slides: 2 sections, 3 sections, none
    fn make_deck() -> Deck {
        Deck::new("Test")
            .with_slide(SlideSpec::new("a", "A").with_section("A0").with_section("A1"))
            .with_slide(
                SlideSpec::new("b", "B")
                    .with_section("B0")
                    .with_section("B1")
                    .with_section("B2"),
            )
            .with_slide(SlideSpec::new("end", "End"))
    }

    fn make_presentation() -> Presentation {
        Presentation::new(make_deck()).unwrap()
    }

    #[test]
    fn test_new() {
        let p = make_presentation();
        assert_eq!(p.current_slide(), 0);
        assert_eq!(p.total_slides(), 3);
        assert_eq!(p.current_section(), Some(0));
        assert_eq!(p.mode(), NavigationMode::Section);
        assert_eq!(
            p.events(),
            &[NavEvent::Mounted { mount: p.mount_id(), slide: 0, section: Some(0) }]
        );
    }

    #[test]
    fn test_new_rejects_empty_deck() {
        let result = Presentation::new(Deck::new("Empty"));
        assert!(matches!(result, Err(DeckError::Invalid(_))));
    }

    #[test]
    fn test_with_mode() {
        let p = make_presentation().with_mode(NavigationMode::Slide);
        assert_eq!(p.mode(), NavigationMode::Slide);
    }

    #[test]
    fn test_next_slide_clamps() {
        let mut p = make_presentation();
        assert!(p.go_to_next_slide());
        assert!(p.go_to_next_slide());
        assert!(!p.go_to_next_slide());
        assert_eq!(p.current_slide(), 2);
    }

    #[test]
    fn test_previous_slide_clamps() {
        let mut p = make_presentation();
        assert!(!p.go_to_previous_slide());
        assert_eq!(p.current_slide(), 0);
    }

    #[test]
    fn test_slide_change_gives_fresh_mount() {
        let mut p = make_presentation();
        let first = p.mount_id();
        p.go_to_next_slide();
        let second = p.mount_id();
        p.go_to_previous_slide();
        assert!(second > first);
        assert!(p.mount_id() > second);
    }

    #[test]
    fn test_transition_event_order() {
        let mut p = make_presentation();
        let first = p.mount_id();
        p.drain_events();

        p.go_to_next_slide();
        let events = p.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            NavEvent::Unmounted { mount: first, slide: 0, listeners_released: 3 }
        );
        assert_eq!(
            events[1],
            NavEvent::SlideChanged { from: 0, to: 1, direction: Direction::Forward }
        );
        assert_eq!(
            events[2],
            NavEvent::Mounted { mount: p.mount_id(), slide: 1, section: Some(0) }
        );
    }

    #[test]
    fn test_controls_previous_lands_on_first_section() {
        let mut p = make_presentation();
        p.go_to_next_slide();
        p.go_to_next_slide();
        p.go_to_previous_slide();
        assert_eq!(p.current_slide(), 1);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_next_section_crosses_to_next_slide() {
        let mut p = make_presentation();
        assert!(p.next_section());
        assert_eq!(p.current_section(), Some(1));
        assert!(p.next_section());
        assert_eq!(p.current_slide(), 1);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_previous_section_crosses_to_last_section() {
        let mut p = make_presentation();
        p.go_to_next_slide();
        p.go_to_next_slide();
        p.go_to_previous_slide();
        // Slide 1, section 0
        assert!(p.previous_section());
        assert_eq!(p.current_slide(), 0);
        assert_eq!(p.current_section(), Some(1));
    }

    #[test]
    fn test_previous_section_at_start_is_noop() {
        let mut p = make_presentation();
        p.drain_events();
        assert!(!p.previous_section());
        assert_eq!(p.current_slide(), 0);
        assert_eq!(p.current_section(), Some(0));
        assert!(p.events().is_empty());
    }

    #[test]
    fn test_slide_without_sections() {
        let mut p = make_presentation();
        p.go_to_slide(2);
        assert_eq!(p.current_section(), None);
        assert_eq!(p.section_count(), 0);
        assert!(p.section_indicators().is_empty());
        assert!(!p.next_section());
        assert!(!p.previous_section());
        assert!(!p.select_section(0));
        // Only the controls listener is live
        assert_eq!(p.listeners().len(), 1);
    }

    #[test]
    fn test_select_section() {
        let mut p = make_presentation();
        p.go_to_next_slide();
        assert!(p.select_section(2));
        assert_eq!(p.current_section(), Some(2));
        assert_eq!(p.section_indicators(), vec![false, false, true]);
        assert!(!p.select_section(3));
        assert!(!p.select_section(2));
    }

    #[test]
    fn test_go_to_slide_steps() {
        let mut p = make_presentation();
        assert_eq!(p.go_to_slide(2), 2);
        assert_eq!(p.go_to_slide(0), 2);
        assert_eq!(p.go_to_slide(0), 0);
        assert_eq!(p.go_to_slide(9), 0);
        assert_eq!(p.current_slide(), 0);
    }

    #[test]
    fn test_toggle_mode() {
        let mut p = make_presentation();
        assert_eq!(p.toggle_mode(), NavigationMode::Slide);
        assert_eq!(p.toggle_mode(), NavigationMode::Section);
        let modes: Vec<_> = p
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, NavEvent::ModeChanged(_)))
            .collect();
        assert_eq!(modes.len(), 2);
    }

    #[test]
    fn test_set_same_mode_records_nothing() {
        let mut p = make_presentation();
        p.drain_events();
        p.set_mode(NavigationMode::Section);
        assert!(p.events().is_empty());
    }

    #[test]
    fn test_apply_commands() {
        let mut p = make_presentation();
        assert!(p.apply(NavCommand::NextSection));
        assert!(p.apply(NavCommand::SelectSection(0)));
        assert!(p.apply(NavCommand::GoToSlide(1)));
        assert!(!p.apply(NavCommand::GoToSlide(1)));
        assert!(p.apply(NavCommand::PreviousSlide));
        assert!(p.apply(NavCommand::NextSlide));
        assert!(p.apply(NavCommand::PreviousSection));
        assert_eq!(p.current_slide(), 0);
        assert_eq!(p.current_section(), Some(1));
        assert!(p.apply(NavCommand::ToggleMode));
        assert_eq!(p.mode(), NavigationMode::Slide);
    }

    #[test]
    fn test_dispatch_space_and_backspace() {
        let mut p = make_presentation();
        let dispatch = p.dispatch(&InputEvent::KeyDown(Key::Space));
        assert!(dispatch.suppress_default);
        assert!(dispatch.changed);
        assert_eq!(p.current_section(), Some(1));

        let dispatch = p.dispatch(&InputEvent::KeyDown(Key::Backspace));
        assert!(dispatch.suppress_default);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_dispatch_tab_toggles_once() {
        let mut p = make_presentation();
        let dispatch = p.dispatch(&InputEvent::KeyDown(Key::Tab));
        assert!(dispatch.suppress_default);
        assert_eq!(p.mode(), NavigationMode::Slide);
    }

    #[test]
    fn test_dispatch_arrow_in_slide_mode_moves_slide_once() {
        let mut p = make_presentation().with_mode(NavigationMode::Slide);
        let dispatch = p.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
        assert!(dispatch.changed);
        // Section listener of the new slide must not also react
        assert_eq!(p.current_slide(), 1);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_listener_released_during_dispatch_is_skipped() {
        let mut p = make_presentation().with_mode(NavigationMode::Slide);
        let first = p.mount_id();
        // Controls and slide 0's keyboard listener are both subscribed
        assert_eq!(p.listeners().subscribed(EventKinds::KEYBOARD).len(), 2);

        // Controls moves to slide 1, releasing slide 0's listener mid-dispatch
        let dispatch = p.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
        assert_eq!(dispatch.delivered, 1);
        assert_ne!(p.mount_id(), first);
        assert_eq!(p.current_slide(), 1);
    }

    #[test]
    fn test_stale_mount_handler_does_nothing() {
        let mut p = make_presentation();
        let stale = p.mount_id();
        p.go_to_next_slide();
        p.drain_events();

        assert!(!p.handle_slide(stale, &InputEvent::KeyDown(Key::Space)));
        assert!(!p.handle_slide(stale, &InputEvent::Click(ClickTarget::SectionIndicator(2))));
        assert_eq!(p.current_slide(), 1);
        assert_eq!(p.current_section(), Some(0));
        assert!(p.events().is_empty());
    }

    #[test]
    fn test_dispatch_counts_delivered_listeners() {
        let mut p = make_presentation();
        assert_eq!(p.dispatch(&InputEvent::KeyDown(Key::Space)).delivered, 2);
        assert_eq!(
            p.dispatch(&InputEvent::Wheel { delta_y: 1.0, over_content: true }).delivered,
            1
        );
        p.go_to_slide(2);
        // Only controls listen on a slide without sections
        assert_eq!(p.dispatch(&InputEvent::KeyDown(Key::Space)).delivered, 1);
        assert_eq!(
            p.dispatch(&InputEvent::Wheel { delta_y: 1.0, over_content: true }).delivered,
            0
        );
    }

    #[test]
    fn test_space_crossing_is_delivered_once() {
        let mut p = make_presentation();
        p.next_section();
        // Last section of slide 0: Space crosses into slide 1 exactly once
        p.dispatch(&InputEvent::KeyDown(Key::Space));
        assert_eq!(p.current_slide(), 1);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_wheel_outside_content_ignored() {
        let mut p = make_presentation();
        let dispatch = p.dispatch(&InputEvent::Wheel { delta_y: 3.0, over_content: false });
        assert!(!dispatch.suppress_default);
        assert!(!dispatch.changed);
        assert_eq!(p.current_section(), Some(0));
    }

    #[test]
    fn test_wheel_zero_delta_suppressed_without_change() {
        let mut p = make_presentation();
        let dispatch = p.dispatch(&InputEvent::Wheel { delta_y: 0.0, over_content: true });
        assert!(dispatch.suppress_default);
        assert!(!dispatch.changed);
    }

    #[test]
    fn test_click_buttons_and_dots() {
        let mut p = make_presentation();
        p.dispatch(&InputEvent::Click(ClickTarget::NextButton));
        assert_eq!(p.current_slide(), 1);
        p.dispatch(&InputEvent::Click(ClickTarget::PreviousButton));
        assert_eq!(p.current_slide(), 0);

        let dispatch = p.dispatch(&InputEvent::Click(ClickTarget::PreviousButton));
        assert!(!dispatch.changed);

        p.dispatch(&InputEvent::Click(ClickTarget::ProgressDot(2)));
        assert_eq!(p.current_slide(), 2);
        let dispatch = p.dispatch(&InputEvent::Click(ClickTarget::NextButton));
        assert!(!dispatch.changed);
    }

    #[test]
    fn test_click_section_indicator() {
        let mut p = make_presentation();
        let dispatch = p.dispatch(&InputEvent::Click(ClickTarget::SectionIndicator(1)));
        assert!(dispatch.changed);
        assert!(!dispatch.suppress_default);
        assert_eq!(p.current_section(), Some(1));
    }

    #[test]
    fn test_listeners_scoped_to_mount() {
        let mut p = make_presentation();
        let first = ListenerOwner::Slide(p.mount_id());
        assert_eq!(p.listeners().count_owned_by(first), 3);

        p.go_to_next_slide();
        assert_eq!(p.listeners().count_owned_by(first), 0);
        assert_eq!(p.listeners().count_owned_by(ListenerOwner::Slide(p.mount_id())), 3);
        assert_eq!(p.listeners().count_owned_by(ListenerOwner::Controls), 1);
        assert_eq!(p.listeners().len(), 4);
    }

    #[test]
    fn test_controls_state_follows_slide() {
        let mut p = make_presentation();
        assert!(!p.controls_state().previous_enabled);
        p.go_to_slide(2);
        let state = p.controls_state();
        assert!(state.previous_enabled);
        assert!(!state.next_enabled);
        assert!(state.dots[2].current);
    }
}
