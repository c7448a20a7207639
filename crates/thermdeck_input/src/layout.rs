//! On-screen controls layout
//!
//! Geometry of the clickable controls, used to hit-test pointer clicks:
//! - Previous/next buttons: 50px squares, 20px from the side edges, centred vertically
//! - Progress dots: 14px squares 15px apart in a padded bar 20px above the bottom edge
//! - Content area: 90% x 85% of the window (max 1600px wide), raised by 15px
//! - Slide content column: left 3/5 of the content area (30px gutter)
//! - Section strip: 20px wide along the right edge of the content column
//!
//! All sizes are logical pixels scaled by the window's scale factor.

use thermdeck_core::ClickTarget;

const BUTTON_SIZE: f64 = 50.0;
const BUTTON_MARGIN: f64 = 20.0;
const DOT_SIZE: f64 = 14.0;
const DOT_GAP: f64 = 15.0;
const DOTS_PADDING_X: f64 = 16.0;
const DOTS_PADDING_Y: f64 = 8.0;
const DOTS_BOTTOM: f64 = 20.0;
const CONTENT_WIDTH_RATIO: f64 = 0.9;
const CONTENT_HEIGHT_RATIO: f64 = 0.85;
const CONTENT_MAX_WIDTH: f64 = 1600.0;
const CONTENT_RAISE: f64 = 15.0;
const COLUMN_GAP: f64 = 30.0;
const COLUMN_SHARE: f64 = 3.0 / 5.0;
const STRIP_WIDTH: f64 = 20.0;

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Hit regions of the controls for a window size and deck shape
#[derive(Clone, Debug, PartialEq)]
pub struct ControlsLayout {
    previous: Rect,
    next: Rect,
    dots: Vec<Rect>,
    content: Rect,
    strip: Option<Rect>,
    section_count: usize,
}

impl ControlsLayout {
    /// Compute the layout
    ///
    /// `section_count` is the number of sections of the mounted slide
    /// (0 hides the section strip).
    pub fn new(
        width: f64,
        height: f64,
        scale: f64,
        total_slides: usize,
        section_count: usize,
    ) -> Self {
        let s = |v: f64| v * scale;

        let button_top = height / 2.0 - s(BUTTON_SIZE) / 2.0;
        let previous = Rect::new(s(BUTTON_MARGIN), button_top, s(BUTTON_SIZE), s(BUTTON_SIZE));
        let next = Rect::new(
            width - s(BUTTON_MARGIN) - s(BUTTON_SIZE),
            button_top,
            s(BUTTON_SIZE),
            s(BUTTON_SIZE),
        );

        let gaps = total_slides.saturating_sub(1) as f64;
        let bar_width = 2.0 * s(DOTS_PADDING_X) + total_slides as f64 * s(DOT_SIZE) + gaps * s(DOT_GAP);
        let bar_left = (width - bar_width) / 2.0;
        let dot_top = height - s(DOTS_BOTTOM) - s(DOTS_PADDING_Y) - s(DOT_SIZE);
        let dots = (0..total_slides)
            .map(|i| {
                let x = bar_left + s(DOTS_PADDING_X) + i as f64 * (s(DOT_SIZE) + s(DOT_GAP));
                Rect::new(x, dot_top, s(DOT_SIZE), s(DOT_SIZE))
            })
            .collect();

        let content_width = (width * CONTENT_WIDTH_RATIO).min(s(CONTENT_MAX_WIDTH));
        let content_height = height * CONTENT_HEIGHT_RATIO;
        let content_left = (width - content_width) / 2.0;
        let content_top = (height - content_height) / 2.0 - s(CONTENT_RAISE);
        let column_width = ((content_width - s(COLUMN_GAP)) * COLUMN_SHARE).max(0.0);
        let content = Rect::new(content_left, content_top, column_width, content_height);

        let strip = (section_count > 0).then(|| {
            Rect::new(
                content_left + column_width - s(STRIP_WIDTH),
                content_top,
                s(STRIP_WIDTH),
                content_height,
            )
        });

        Self {
            previous,
            next,
            dots,
            content,
            strip,
            section_count,
        }
    }

    pub fn previous_button(&self) -> Rect {
        self.previous
    }

    pub fn next_button(&self) -> Rect {
        self.next
    }

    pub fn dot(&self, index: usize) -> Option<Rect> {
        self.dots.get(index).copied()
    }

    /// Slide content column (receives wheel events)
    pub fn content(&self) -> Rect {
        self.content
    }

    pub fn section_strip(&self) -> Option<Rect> {
        self.strip
    }

    /// Whether a point lies over the slide content
    pub fn over_content(&self, x: f64, y: f64) -> bool {
        self.content.contains(x, y)
    }

    /// The control under a point, if any
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ClickTarget> {
        if self.previous.contains(x, y) {
            return Some(ClickTarget::PreviousButton);
        }
        if self.next.contains(x, y) {
            return Some(ClickTarget::NextButton);
        }
        if let Some(index) = self.dots.iter().position(|dot| dot.contains(x, y)) {
            return Some(ClickTarget::ProgressDot(index));
        }

        // Strip is split evenly between the sections
        let strip = self.strip?;
        if !strip.contains(x, y) {
            return None;
        }
        let band = strip.height / self.section_count as f64;
        let index = ((y - strip.y) / band) as usize;
        Some(ClickTarget::SectionIndicator(index.min(self.section_count - 1)))
    }
}
