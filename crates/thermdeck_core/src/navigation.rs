//! Navigation vocabulary
//!
//! Modes, directions, transition requests, commands, and the events a
//! [`Presentation`](crate::Presentation) reports after each change.

use serde::{Serialize, Deserialize};

/// Whether arrow keys drive section transitions or slide transitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Arrow keys move between sections of the current slide
    #[default]
    Section,
    /// Arrow keys move between slides
    Slide,
}

impl NavigationMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            NavigationMode::Section => NavigationMode::Slide,
            NavigationMode::Slide => NavigationMode::Section,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavigationMode::Section => "section",
            NavigationMode::Slide => "slide",
        }
    }
}

/// Direction of a slide transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Which section a newly mounted slide starts on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    FirstSection,
    LastSection,
}

impl EntryPoint {
    /// Resolve to a section index for a slide with `count` sections
    ///
    /// `count` must be non-zero.
    pub fn resolve(self, count: usize) -> usize {
        match self {
            EntryPoint::FirstSection => 0,
            EntryPoint::LastSection => count.saturating_sub(1),
        }
    }
}

/// A single-step slide transition together with where to land
///
/// The entry point travels with the request, so a request that cannot be
/// applied leaves nothing behind for a later transition to pick up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRequest {
    pub direction: Direction,
    pub entry: EntryPoint,
}

impl TransitionRequest {
    /// Next slide, starting at its first section
    pub const fn forward() -> Self {
        Self {
            direction: Direction::Forward,
            entry: EntryPoint::FirstSection,
        }
    }

    /// Previous slide, starting at its first section (controls, slide mode)
    pub const fn backward() -> Self {
        Self {
            direction: Direction::Backward,
            entry: EntryPoint::FirstSection,
        }
    }

    /// Previous slide, starting at its last section (section navigation)
    pub const fn backward_to_last() -> Self {
        Self {
            direction: Direction::Backward,
            entry: EntryPoint::LastSection,
        }
    }
}

/// Semantic navigation commands, independent of the input that produced them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    NextSlide,
    PreviousSlide,
    /// Progress dot: replayed as single steps
    GoToSlide(usize),
    NextSection,
    PreviousSection,
    /// Section indicator: direct jump
    SelectSection(usize),
    ToggleMode,
}

/// Identity of one slide mount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub(crate) u64);

impl MountId {
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What changed, in the order it happened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// A slide was mounted with the given starting section
    Mounted {
        mount: MountId,
        slide: usize,
        section: Option<usize>,
    },
    /// A slide was unmounted and its listeners released
    Unmounted {
        mount: MountId,
        slide: usize,
        listeners_released: usize,
    },
    SlideChanged {
        from: usize,
        to: usize,
        direction: Direction,
    },
    SectionChanged {
        slide: usize,
        from: usize,
        to: usize,
    },
    ModeChanged(NavigationMode),
}
