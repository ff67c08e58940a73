//! Contact form submission and newsletter sign-up flows
//!
//! The contact form goes Idle → Sending → Sent | Failed → Idle. The terminal
//! phases hold for a fixed delay before the button is restored; only a
//! successful send clears the form.

/// How long the sent/error state stays on the button (ms)
pub const SUBMIT_RESET_DELAY_MS: u32 = 3000;

/// Button label while the request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Button label after a successful send
pub const SENT_LABEL: &str = "Message Sent!";

/// Button label after a failed send
pub const ERROR_LABEL: &str = "Error - Try Again";

/// Button background after a successful send
pub const SUCCESS_BACKGROUND: &str = "#28a745";

/// Button background after a failed send
pub const ERROR_BACKGROUND: &str = "#dc3545";

/// Header sent with the contact form post
pub const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// Where a contact submission currently is
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// What the submit button should look like in a phase
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: String,
    pub background: &'static str,
    pub disabled: bool,
}

/// What to undo once a terminal phase has been shown long enough
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetPlan {
    /// Reset the form's fields and validation classes as well as the button
    pub clear_form: bool,
}

/// Contact form submission state machine
#[derive(Clone, Debug, Default)]
pub struct ContactSubmission {
    phase: SubmitPhase,
    original_label: String,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Start sending, remembering the button's current label.
    ///
    /// Returns `false` if a submission is already under way.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.original_label = current_label.to_string();
        self.phase = SubmitPhase::Sending;
        true
    }

    /// Record how the request settled
    pub fn settle(&mut self, success: bool) {
        if self.phase == SubmitPhase::Sending {
            self.phase = if success {
                SubmitPhase::Sent
            } else {
                SubmitPhase::Failed
            };
        }
    }

    /// Return to idle after the terminal phase delay.
    ///
    /// Returns `None` if there is nothing to reset.
    pub fn reset(&mut self) -> Option<ResetPlan> {
        let plan = match self.phase {
            SubmitPhase::Sent => ResetPlan { clear_form: true },
            SubmitPhase::Failed => ResetPlan { clear_form: false },
            SubmitPhase::Idle | SubmitPhase::Sending => return None,
        };
        self.phase = SubmitPhase::Idle;
        Some(plan)
    }

    /// Button presentation for the current phase
    pub fn button(&self) -> ButtonLook {
        match self.phase {
            SubmitPhase::Idle => ButtonLook {
                label: self.original_label.clone(),
                background: "",
                disabled: false,
            },
            SubmitPhase::Sending => ButtonLook {
                label: SENDING_LABEL.to_string(),
                background: "",
                disabled: true,
            },
            SubmitPhase::Sent => ButtonLook {
                label: SENT_LABEL.to_string(),
                background: SUCCESS_BACKGROUND,
                disabled: true,
            },
            SubmitPhase::Failed => ButtonLook {
                label: ERROR_LABEL.to_string(),
                background: ERROR_BACKGROUND,
                disabled: true,
            },
        }
    }
}

/// Newsletter confirmation text
pub const NEWSLETTER_SUCCESS_TEXT: &str = "Thank you for subscribing!";

/// Button content while the confirmation is up
pub const NEWSLETTER_CHECK_ICON: &str = r#"<i class="bi bi-check"></i>"#;

/// Delay before the confirmation fades in (ms)
pub const NEWSLETTER_SHOW_DELAY_MS: u32 = 100;

/// Delay before the confirmation fades out (ms)
pub const NEWSLETTER_HIDE_DELAY_MS: u32 = 3000;

/// Fade-out time before the confirmation leaves the DOM (ms)
pub const NEWSLETTER_REMOVE_DELAY_MS: u32 = 300;

/// Delay before the button and field are restored (ms)
pub const NEWSLETTER_RESTORE_DELAY_MS: u32 = 3000;

/// One scripted step of the newsletter confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterStep {
    /// Insert the confirmation element
    Insert,
    /// Add `show` to fade it in
    Show,
    /// Remove `show` to fade it out
    Hide,
    /// Restore the button and reset the form
    Restore,
    /// Take the confirmation out of the DOM
    Remove,
}

/// The confirmation sequence as `(ms after submit, step)`, in firing order
pub fn newsletter_timeline() -> [(u32, NewsletterStep); 5] {
    [
        (0, NewsletterStep::Insert),
        (NEWSLETTER_SHOW_DELAY_MS, NewsletterStep::Show),
        (NEWSLETTER_HIDE_DELAY_MS, NewsletterStep::Hide),
        (NEWSLETTER_RESTORE_DELAY_MS, NewsletterStep::Restore),
        (
            NEWSLETTER_HIDE_DELAY_MS + NEWSLETTER_REMOVE_DELAY_MS,
            NewsletterStep::Remove,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sequence() {
        let mut submission = ContactSubmission::new();
        assert!(submission.begin("Send Message"));
        assert_eq!(submission.button().label, "Sending...");
        assert!(submission.button().disabled);

        submission.settle(true);
        let look = submission.button();
        assert_eq!(look.label, "Message Sent!");
        assert_eq!(look.background, SUCCESS_BACKGROUND);

        assert_eq!(submission.reset(), Some(ResetPlan { clear_form: true }));
        let look = submission.button();
        assert_eq!(look.label, "Send Message");
        assert_eq!(look.background, "");
        assert!(!look.disabled);
    }

    #[test]
    fn test_failure_sequence_keeps_form() {
        let mut submission = ContactSubmission::new();
        submission.begin("Send Message");
        submission.settle(false);

        let look = submission.button();
        assert_eq!(look.label, "Error - Try Again");
        assert_eq!(look.background, ERROR_BACKGROUND);
        assert!(look.disabled);

        assert_eq!(submission.reset(), Some(ResetPlan { clear_form: false }));
        assert_eq!(submission.button().label, "Send Message");
        assert_eq!(submission.phase(), &SubmitPhase::Idle);
    }

    #[test]
    fn test_no_second_submission_while_busy() {
        let mut submission = ContactSubmission::new();
        assert!(submission.begin("Send"));
        assert!(!submission.begin("Sending..."));

        submission.settle(true);
        assert!(!submission.begin("Message Sent!"));

        submission.reset();
        assert!(submission.begin("Send"));
    }

    #[test]
    fn test_retry_after_failure_remembers_original_label() {
        let mut submission = ContactSubmission::new();
        submission.begin("Send");
        submission.settle(false);
        submission.reset();

        submission.begin("Send");
        submission.settle(true);
        submission.reset();
        assert_eq!(submission.button().label, "Send");
    }

    #[test]
    fn test_settle_and_reset_ignored_when_idle() {
        let mut submission = ContactSubmission::new();
        submission.settle(true);
        assert_eq!(submission.phase(), &SubmitPhase::Idle);
        assert_eq!(submission.reset(), None);
    }

    #[test]
    fn test_reset_ignored_while_sending() {
        let mut submission = ContactSubmission::new();
        submission.begin("Send");
        assert_eq!(submission.reset(), None);
        assert_eq!(submission.phase(), &SubmitPhase::Sending);
    }

    #[test]
    fn test_newsletter_timeline_order() {
        let timeline = newsletter_timeline();
        let times: Vec<u32> = timeline.iter().map(|(at, _)| *at).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);

        assert_eq!(timeline.first().map(|s| s.1), Some(NewsletterStep::Insert));
        assert_eq!(timeline.last(), Some(&(3300, NewsletterStep::Remove)));
    }

    #[test]
    fn test_newsletter_message_visible_window() {
        let timeline = newsletter_timeline();
        let at = |step: NewsletterStep| {
            timeline
                .iter()
                .find(|(_, s)| *s == step)
                .map(|(at, _)| *at)
                .unwrap()
        };
        assert_eq!(at(NewsletterStep::Hide) - at(NewsletterStep::Show), 2900);
        assert_eq!(at(NewsletterStep::Remove) - at(NewsletterStep::Hide), 300);
    }
}
