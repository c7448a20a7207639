//! Controls view state
//!
//! What the on-screen controls need to draw themselves: button enablement
//! and one progress dot per slide.

/// State of one progress dot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressDot {
    /// Slide index is at or before the current slide
    pub reached: bool,
    /// Slide index is the current slide
    pub current: bool,
}

/// Snapshot of the controls for the current slide
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlsState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub dots: Vec<ProgressDot>,
}

impl ControlsState {
    /// Build the controls state for `current` out of `total` slides
    pub fn new(current: usize, total: usize) -> Self {
        let dots = (0..total)
            .map(|index| ProgressDot {
                reached: index <= current,
                current: index == current,
            })
            .collect();

        Self {
            previous_enabled: current > 0,
            next_enabled: current + 1 < total,
            dots,
        }
    }

    /// Compact text form, e.g. `■■▣□□□`
    pub fn progress_bar(&self) -> String {
        self.dots
            .iter()
            .map(|dot| match (dot.current, dot.reached) {
                (true, _) => '▣',
                (false, true) => '■',
                (false, false) => '□',
            })
            .collect()
    }

    /// Progress bar between the buttons, e.g. `◀ ■▣□ ▶`
    ///
    /// A disabled button is drawn hollow.
    pub fn status_line(&self) -> String {
        let previous = if self.previous_enabled { '◀' } else { '◁' };
        let next = if self.next_enabled { '▶' } else { '▷' };
        format!("{} {} {}", previous, self.progress_bar(), next)
    }
}
