//! # Scroll Tracking
//!
//! Tracks whether the page has scrolled past the point where the header
//! switches to its solid style.

/// Offset, in pixels, past which the page counts as scrolled.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Threshold tracker for the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl ScrollTracker {
    /// Creates a tracker with a custom threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Records a new vertical offset.
    ///
    /// Returns true if the scrolled flag changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Whether the last observed offset was past the threshold.
    #[must_use]
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
