//! Per-slide section controller
//!
//! Tracks the active section of a mounted slide. Crossing either end of the
//! section list does not move the controller; it reports a
//! [`TransitionRequest`] for the presentation to apply.

use crate::navigation::{EntryPoint, TransitionRequest};

/// Result of a next/previous step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionStep {
    /// Moved within the slide
    Moved { from: usize, to: usize },
    /// Hit a boundary; the slide-level transition to perform
    Crossed(TransitionRequest),
}

/// Section state of one mounted slide
#[derive(Clone, Debug)]
pub struct SectionController {
    active: usize,
    count: usize,
}

impl SectionController {
    /// Mount a controller for `count` sections, starting at `entry`
    ///
    /// Returns `None` for a slide without sections.
    pub fn mount(count: usize, entry: EntryPoint) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            active: entry.resolve(count),
            count,
        })
    }

    /// Currently active section
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of sections
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last_index(&self) -> usize {
        self.count - 1
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active == self.last_index()
    }

    /// Advance one section, or report a forward crossing at the last one
    pub fn next(&mut self) -> SectionStep {
        if self.active < self.last_index() {
            let from = self.active;
            self.active += 1;
            SectionStep::Moved { from, to: self.active }
        } else {
            SectionStep::Crossed(TransitionRequest::forward())
        }
    }

    /// Go back one section, or report a backward crossing at the first one
    ///
    /// The backward crossing asks the previous slide to start at its last
    /// section.
    pub fn previous(&mut self) -> SectionStep {
        if self.active > 0 {
            let from = self.active;
            self.active -= 1;
            SectionStep::Moved { from, to: self.active }
        } else {
            SectionStep::Crossed(TransitionRequest::backward_to_last())
        }
    }

    /// Jump straight to `index`
    ///
    /// Returns the previous section if the selection changed anything.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.count || index == self.active {
            return None;
        }
        let from = self.active;
        self.active = index;
        Some(from)
    }

    /// Back to the first section
    pub fn reset(&mut self) {
        self.active = 0;
    }

    /// Active flag for each section indicator
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.active).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Direction;

    #[test]
    fn test_mount_without_sections() {
        assert!(SectionController::mount(0, EntryPoint::FirstSection).is_none());
        assert!(SectionController::mount(0, EntryPoint::LastSection).is_none());
    }

    #[test]
    fn test_mount_entry_points() {
        let first = SectionController::mount(4, EntryPoint::FirstSection).unwrap();
        assert_eq!(first.active(), 0);
        let last = SectionController::mount(4, EntryPoint::LastSection).unwrap();
        assert_eq!(last.active(), 3);
        assert!(last.is_last());
    }

    #[test]
    fn test_next_moves_then_crosses() {
        let mut sections = SectionController::mount(3, EntryPoint::FirstSection).unwrap();
        assert_eq!(sections.next(), SectionStep::Moved { from: 0, to: 1 });
        assert_eq!(sections.next(), SectionStep::Moved { from: 1, to: 2 });

        match sections.next() {
            SectionStep::Crossed(request) => {
                assert_eq!(request.direction, Direction::Forward);
                assert_eq!(request.entry, EntryPoint::FirstSection);
            }
            other => panic!("Expected crossing, got {:?}", other),
        }
        // Crossing leaves the controller where it was
        assert_eq!(sections.active(), 2);
    }

    #[test]
    fn test_previous_crosses_to_last() {
        let mut sections = SectionController::mount(2, EntryPoint::LastSection).unwrap();
        assert_eq!(sections.previous(), SectionStep::Moved { from: 1, to: 0 });
        assert_eq!(
            sections.previous(),
            SectionStep::Crossed(TransitionRequest::backward_to_last())
        );
        assert_eq!(sections.active(), 0);
    }

    #[test]
    fn test_single_section_crosses_both_ways() {
        let mut sections = SectionController::mount(1, EntryPoint::FirstSection).unwrap();
        assert!(sections.is_first() && sections.is_last());
        assert!(matches!(sections.next(), SectionStep::Crossed(_)));
        assert!(matches!(sections.previous(), SectionStep::Crossed(_)));
    }

    #[test]
    fn test_never_leaves_bounds() {
        let mut sections = SectionController::mount(5, EntryPoint::FirstSection).unwrap();
        for _ in 0..20 {
            sections.next();
            assert!(sections.active() < sections.count());
        }
        for _ in 0..20 {
            sections.previous();
            assert!(sections.active() < sections.count());
        }
        assert_eq!(sections.active(), 0);
    }

    #[test]
    fn test_select() {
        let mut sections = SectionController::mount(4, EntryPoint::FirstSection).unwrap();
        assert_eq!(sections.select(3), Some(0));
        assert_eq!(sections.active(), 3);
        // Same section: nothing to do
        assert_eq!(sections.select(3), None);
        // Out of range: ignored
        assert_eq!(sections.select(4), None);
        assert_eq!(sections.active(), 3);
    }

    #[test]
    fn test_reset_and_indicators() {
        let mut sections = SectionController::mount(3, EntryPoint::LastSection).unwrap();
        assert_eq!(sections.indicators(), vec![false, false, true]);
        sections.reset();
        assert_eq!(sections.indicators(), vec![true, false, false]);
    }
}
