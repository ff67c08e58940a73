//! Animated statistic counters
//!
//! A counter climbs from zero to its target over a fixed number of frames and
//! then settles on the exact target. The animation is armed once: the first
//! time the counter scrolls into view it starts, later visibility changes are
//! ignored.

/// Number of frames a counter takes to reach its target
pub const COUNTER_FRAMES: f64 = 50.0;

/// Portion of the counter that must be visible before it starts
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Suffix used unless the counter is the footer's percentage figure
pub const DEFAULT_SUFFIX: &str = "+";

/// Suffix of the second counter in a two-counter footer group
pub const PERCENT_SUFFIX: &str = "%";

/// Parse a `data-target` attribute.
///
/// Returns `None` for anything that isn't a finite number; such counters are
/// left as static text.
pub fn parse_target(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Choose the unit suffix for a counter.
///
/// `footer_position` is the counter's `(index, count)` inside the footer stats
/// group, or `None` when the counter lives elsewhere on the page.
pub fn suffix_for(footer_position: Option<(usize, usize)>) -> &'static str {
    match footer_position {
        Some((1, 2)) => PERCENT_SUFFIX,
        _ => DEFAULT_SUFFIX,
    }
}

/// Render a number the way it reads on the page: `98`, not `98.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// One rendered frame of a counter
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Progress of a single counter
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    count: f64,
    increment: f64,
    target: f64,
    suffix: &'static str,
    counted: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, suffix: &'static str) -> Self {
        Self {
            count: 0.0,
            increment: target / COUNTER_FRAMES,
            target,
            suffix,
            counted: false,
        }
    }

    /// Arm the animation on a visibility notification.
    ///
    /// Returns `true` only the first time; the caller starts the frame loop then.
    pub fn trigger(&mut self) -> bool {
        if self.counted {
            return false;
        }
        self.counted = true;
        true
    }

    pub fn is_counted(&self) -> bool {
        self.counted
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Advance by one frame.
    pub fn step(&mut self) -> CounterFrame {
        self.count += self.increment;
        if self.count < self.target {
            CounterFrame {
                text: format!("{}{}", format_number(self.count.ceil()), self.suffix),
                done: false,
            }
        } else {
            CounterFrame {
                text: format!("{}{}", format_number(self.target), self.suffix),
                done: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = animation.step();
            let done = frame.done;
            frames.push(frame);
            if done || frames.len() > 1000 {
                break;
            }
        }
        frames
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("150"), Some(150.0));
        assert_eq!(parse_target(" 98 "), Some(98.0));
        assert_eq!(parse_target("4.5"), Some(4.5));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("lots"), None);
        assert_eq!(parse_target("inf"), None);
    }

    #[test]
    fn test_suffix_for() {
        assert_eq!(suffix_for(None), "+");
        assert_eq!(suffix_for(Some((0, 2))), "+");
        assert_eq!(suffix_for(Some((1, 2))), "%");
        // Only a pair gets the percentage
        assert_eq!(suffix_for(Some((1, 3))), "+");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(98.0), "98");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(4.5), "4.5");
    }

    #[test]
    fn test_counter_ends_on_exact_target() {
        for target in [1.0, 7.0, 20.0, 98.0, 150.0, 1234.0, 2.5] {
            let mut animation = CounterAnimation::new(target, "+");
            let frames = run_to_end(&mut animation);
            let last = frames.last().unwrap();
            assert!(last.done);
            assert_eq!(last.text, format!("{}+", format_number(target)));
        }
    }

    #[test]
    fn test_counter_climbs_in_ceiling_steps() {
        let mut animation = CounterAnimation::new(100.0, "+");
        assert_eq!(animation.step().text, "2+");
        assert_eq!(animation.step().text, "4+");
        assert_eq!(animation.step().text, "6+");
    }

    #[test]
    fn test_counter_takes_about_fifty_frames() {
        let mut animation = CounterAnimation::new(500.0, "%");
        let frames = run_to_end(&mut animation);
        assert!((49..=51).contains(&frames.len()), "{} frames", frames.len());
        assert_eq!(frames.last().unwrap().text, "500%");
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0.0, "+");
        let frame = animation.step();
        assert!(frame.done);
        assert_eq!(frame.text, "0+");
    }

    #[test]
    fn test_trigger_only_once() {
        let mut animation = CounterAnimation::new(42.0, "+");
        assert!(!animation.is_counted());
        assert!(animation.trigger());
        assert!(animation.is_counted());
        for _ in 0..5 {
            assert!(!animation.trigger());
        }
    }
}
