#[cfg(test)]
mod tests {
    use crate::core::counter::{CounterAnimation, suffix_for};
    use crate::core::forms::{FieldInput, FieldKind, all_valid, is_valid_email, validate_field};
    use crate::core::progress::{ProgressUpdate, ScrollProgress};
    use crate::core::scroll::{SectionBoundary, current_section, navbar_scrolled};
    use crate::core::submission::{
        ContactSubmission, NewsletterStep, ResetPlan, newsletter_timeline,
    };

    /// Minimal stand-in for the contact form's fields
    struct ContactForm {
        name: String,
        email: String,
        message: String,
    }

    impl ContactForm {
        fn fields(&self) -> Vec<FieldInput<'_>> {
            vec![
                FieldInput {
                    kind: FieldKind::Text,
                    name: "name",
                    required: true,
                    value: &self.name,
                },
                FieldInput {
                    kind: FieldKind::Email,
                    name: "email",
                    required: true,
                    value: &self.email,
                },
                FieldInput {
                    kind: FieldKind::TextArea { min_length: 10 },
                    name: "message",
                    required: true,
                    value: &self.message,
                },
            ]
        }

        fn clear(&mut self) {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Could you send me a quote?".to_string(),
        }
    }

    /// Runs a submit through validation and the phase machine, returning the
    /// button labels in the order they would be shown.
    fn submit(form: &mut ContactForm, response_ok: bool) -> Vec<String> {
        let mut labels = vec!["Send Message".to_string()];
        let outcomes: Vec<_> = form.fields().iter().map(validate_field).collect();
        if !all_valid(&outcomes) {
            return labels;
        }

        let mut submission = ContactSubmission::new();
        assert!(submission.begin("Send Message"));
        labels.push(submission.button().label);

        submission.settle(response_ok);
        labels.push(submission.button().label);

        if let Some(ResetPlan { clear_form }) = submission.reset() {
            if clear_form {
                form.clear();
            }
        }
        labels.push(submission.button().label);
        labels
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let mut form = filled_form();
        let labels = submit(&mut form, true);

        assert_eq!(
            labels,
            vec!["Send Message", "Sending...", "Message Sent!", "Send Message"]
        );
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_form() {
        let mut form = filled_form();
        let labels = submit(&mut form, false);

        assert_eq!(
            labels,
            vec![
                "Send Message",
                "Sending...",
                "Error - Try Again",
                "Send Message"
            ]
        );
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Could you send me a quote?");
    }

    #[test]
    fn test_invalid_form_never_sends() {
        let mut form = filled_form();
        form.email = "ada@example".to_string();

        let labels = submit(&mut form, true);
        assert_eq!(labels, vec!["Send Message"]);
        assert_eq!(form.name, "Ada Lovelace");
    }

    /// Replays the newsletter timeline against a list of rendered messages
    fn run_newsletter(email: &str) -> (bool, Vec<(u32, usize)>) {
        let mut marked_invalid = false;
        let mut rendered: Vec<&str> = Vec::new();
        let mut history = Vec::new();

        if !is_valid_email(email.trim()) {
            marked_invalid = true;
            history.push((0, rendered.len()));
            return (marked_invalid, history);
        }

        for (at, step) in newsletter_timeline() {
            match step {
                NewsletterStep::Insert => rendered.push("Thank you for subscribing!"),
                NewsletterStep::Remove => {
                    rendered.clear();
                }
                NewsletterStep::Show | NewsletterStep::Hide | NewsletterStep::Restore => {}
            }
            history.push((at, rendered.len()));
        }
        (marked_invalid, history)
    }

    #[test]
    fn test_newsletter_rejects_invalid_address() {
        let (invalid, history) = run_newsletter("not-an-email");
        assert!(invalid);
        assert!(history.iter().all(|(_, shown)| *shown == 0));
    }

    #[test]
    fn test_newsletter_message_inserted_then_removed() {
        let (invalid, history) = run_newsletter("user@site.org");
        assert!(!invalid);
        assert_eq!(history.first(), Some(&(0, 1)));
        assert_eq!(history.last(), Some(&(3300, 0)));
    }

    #[test]
    fn test_scroll_session() {
        let sections = vec![
            SectionBoundary::new("home", 0.0, 900.0),
            SectionBoundary::new("services", 900.0, 1100.0),
            SectionBoundary::new("contact", 2000.0, 1000.0),
        ];
        let mut progress = ScrollProgress::new();

        let mut frames = 0;
        // A burst of scroll events between two frames, all at the same offset
        for offset in [500.0, 500.0, 500.0] {
            if progress.request_frame() {
                frames += 1;
            }
            assert!(navbar_scrolled(offset));
            assert_eq!(current_section(&sections, offset), Some("home"));
        }
        assert_eq!(frames, 1);
        assert_eq!(
            progress.update(500.0, 3000.0, 1000.0),
            ProgressUpdate::Scale(0.25)
        );

        // The next frame sees the same offset and does nothing
        assert!(progress.request_frame());
        assert_eq!(
            progress.update(500.0, 3000.0, 1000.0),
            ProgressUpdate::Unchanged
        );

        assert_eq!(current_section(&sections, 1900.0), Some("contact"));
    }

    #[test]
    fn test_footer_counters() {
        let mut clients = CounterAnimation::new(20.0, suffix_for(Some((0, 2))));
        let mut satisfaction = CounterAnimation::new(98.0, suffix_for(Some((1, 2))));

        for counter in [&mut clients, &mut satisfaction] {
            assert!(counter.trigger());
            assert!(!counter.trigger());
        }

        let finish = |counter: &mut CounterAnimation| loop {
            let frame = counter.step();
            if frame.done {
                break frame.text;
            }
        };
        assert_eq!(finish(&mut clients), "20+");
        assert_eq!(finish(&mut satisfaction), "98%");
    }
}
