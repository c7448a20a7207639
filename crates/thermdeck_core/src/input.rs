//! Platform-neutral input events
//!
//! The windowing layer translates raw events into these before handing them
//! to [`Presentation::dispatch`](crate::Presentation::dispatch).

/// Keys the navigation layer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Backspace,
    Tab,
}

/// Clickable parts of the on-screen controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    PreviousButton,
    NextButton,
    /// Progress dot for a slide
    ProgressDot(usize),
    /// Section indicator of the mounted slide
    SectionIndicator(usize),
}

/// An input event ready for dispatch
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Browser sign convention: positive `delta_y` scrolls down
    Wheel { delta_y: f64, over_content: bool },
    Click(ClickTarget),
}

/// Outcome of dispatching one event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// A listener claimed the event, so its default action should not run
    pub suppress_default: bool,
    /// Navigation state changed
    pub changed: bool,
    /// Listeners that received the event
    pub delivered: usize,
}
