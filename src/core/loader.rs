//! Loading overlay progress
//!
//! The overlay shows a simulated progress bar until the page has really
//! loaded. Progress only ever moves forward and is capped at 100.

/// Tick of the simulated progress (ms)
pub const PROGRESS_TICK_MS: u32 = 100;

/// Largest random step per tick (percent)
pub const MAX_PROGRESS_STEP: f64 = 15.0;

/// Pause after the load event before the bar is filled (ms)
pub const LOAD_GRACE_MS: u32 = 800;

/// Pause between filling the bar and hiding the overlay (ms)
pub const HIDE_DELAY_MS: u32 = 300;

/// The overlay is hidden at this point no matter what (ms)
pub const FALLBACK_HIDE_MS: u32 = 5000;

/// Logo animation while loading
pub const LOGO_ANIMATION: &str = "logoFloat 2s ease-in-out infinite alternate";

/// Spinner animation while loading
pub const SPINNER_ANIMATION: &str =
    "spinnerRotate 1s linear infinite, spinnerPulse 2s ease-in-out infinite";

/// Whether `document.readyState` means the load event has already fired
pub fn page_already_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Simulated loading progress, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add one tick's worth of progress from a `[0, 1)` random draw
    pub fn tick(&mut self, unit: f64) -> f64 {
        self.advance(unit * MAX_PROGRESS_STEP)
    }

    /// Move forward by `delta`, capped at 100.
    ///
    /// Negative deltas are ignored.
    pub fn advance(&mut self, delta: f64) -> f64 {
        self.value = (self.value + delta.max(0.0)).min(100.0);
        self.value
    }

    /// Jump straight to 100
    pub fn complete(&mut self) {
        self.value = 100.0;
    }

    pub fn is_complete(&self) -> bool {
        self.value >= 100.0
    }

    /// CSS width of the progress bar
    pub fn css_width(&self) -> String {
        format!("{}%", self.value)
    }
}
