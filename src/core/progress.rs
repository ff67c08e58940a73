//! Reading-progress indicator state
//!
//! Scroll events arrive far more often than frames are painted. The tracker
//! lets at most one recomputation be scheduled per animation frame and skips
//! the work entirely when the scroll offset hasn't moved since the last run.
//!
//! # Usage Example
//!
//! ```rust
//! use vitrine::core::progress::ScrollProgress;
//!
//! let mut progress = ScrollProgress::new();
//!
//! // A burst of scroll events schedules a single frame
//! assert!(progress.request_frame());
//! assert!(!progress.request_frame());
//!
//! // The frame callback recomputes once
//! let scale = progress.recompute(500.0, 2000.0, 1000.0);
//! assert_eq!(scale, Some(0.5));
//! ```

/// Outcome of one recomputation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressUpdate {
    /// Scroll offset is the same as last time
    Unchanged,
    /// Page is not taller than the viewport
    NotScrollable,
    /// Bars should be scaled to this fraction
    Scale(f64),
}

/// Frame-coalescing tracker for the scroll progress bars
#[derive(Debug, Clone, Default)]
pub struct ScrollProgress {
    frame_pending: bool,
    last_scroll_top: Option<f64>,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scroll notification.
    ///
    /// Returns `true` when the caller should schedule an animation frame,
    /// `false` when one is already pending.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    /// Whether a frame is scheduled and not yet run
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Recompute from the current page metrics, clearing the pending frame.
    pub fn update(
        &mut self,
        scroll_top: f64,
        scroll_height: f64,
        viewport_height: f64,
    ) -> ProgressUpdate {
        self.frame_pending = false;

        if self.last_scroll_top == Some(scroll_top) {
            return ProgressUpdate::Unchanged;
        }
        self.last_scroll_top = Some(scroll_top);

        let scrollable = scroll_height - viewport_height;
        if scrollable <= 0.0 {
            return ProgressUpdate::NotScrollable;
        }

        let percentage = (scroll_top / scrollable * 100.0).clamp(0.0, 100.0);
        ProgressUpdate::Scale(percentage / 100.0)
    }

    /// Shorthand for [`update`](Self::update) that only reports a new scale
    pub fn recompute(
        &mut self,
        scroll_top: f64,
        scroll_height: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        match self.update(scroll_top, scroll_height, viewport_height) {
            ProgressUpdate::Scale(scale) => Some(scale),
            _ => None,
        }
    }
}

/// Header bar scale, kept inside `[0, 1]`
pub fn header_bar_scale(scale: f64) -> f64 {
    scale.clamp(0.0, 1.0)
}

/// CSS transform for a horizontal progress bar
pub fn scale_x(scale: f64) -> String {
    format!("scaleX({})", scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_requests_coalesce() {
        let mut progress = ScrollProgress::new();

        assert!(progress.request_frame());
        for _ in 0..10 {
            assert!(!progress.request_frame());
        }
        assert!(progress.is_frame_pending());

        progress.recompute(10.0, 2000.0, 1000.0);
        assert!(!progress.is_frame_pending());
        assert!(progress.request_frame());
    }

    #[test]
    fn test_scale_is_fraction_of_scrollable_height() {
        let mut progress = ScrollProgress::new();
        assert_eq!(progress.recompute(0.0, 3000.0, 1000.0), Some(0.0));
        assert_eq!(progress.recompute(1000.0, 3000.0, 1000.0), Some(0.5));
        assert_eq!(progress.recompute(2000.0, 3000.0, 1000.0), Some(1.0));
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut progress = ScrollProgress::new();
        // Overscroll bounce on some browsers
        assert_eq!(progress.recompute(2500.0, 3000.0, 1000.0), Some(1.0));
        assert_eq!(progress.recompute(-40.0, 3000.0, 1000.0), Some(0.0));
    }

    #[test]
    fn test_no_update_when_page_not_scrollable() {
        let mut progress = ScrollProgress::new();
        assert_eq!(
            progress.update(0.0, 800.0, 800.0),
            ProgressUpdate::NotScrollable
        );
        assert_eq!(
            progress.update(5.0, 600.0, 800.0),
            ProgressUpdate::NotScrollable
        );
    }

    #[test]
    fn test_unchanged_scroll_top_recomputes_once() {
        let mut progress = ScrollProgress::new();
        assert_eq!(progress.recompute(750.0, 2500.0, 1000.0), Some(0.5));
        assert_eq!(
            progress.update(750.0, 2500.0, 1000.0),
            ProgressUpdate::Unchanged
        );
    }

    #[test]
    fn test_resize_with_same_offset_is_skipped() {
        // The cache is keyed on scroll offset only
        let mut progress = ScrollProgress::new();
        progress.recompute(300.0, 2000.0, 1000.0);
        assert_eq!(progress.recompute(300.0, 4000.0, 1000.0), None);
    }

    #[test]
    fn test_header_bar_scale() {
        assert_eq!(header_bar_scale(0.25), 0.25);
        assert_eq!(header_bar_scale(1.5), 1.0);
        assert_eq!(header_bar_scale(-0.1), 0.0);
    }

    #[test]
    fn test_scale_x() {
        assert_eq!(scale_x(0.5), "scaleX(0.5)");
        assert_eq!(scale_x(1.0), "scaleX(1)");
    }
}
