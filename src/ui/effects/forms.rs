//! Contact form validation/submission and newsletter sign-up

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use super::dom::{self, after, listen, query_all_in, query_optional, set_class, set_style};
use crate::core::EffectError;
use crate::core::forms::{
    FieldError, FieldInput, FieldKind, all_valid, is_valid_email, validate_field,
};
use crate::core::submission::{
    ACCEPT_JSON, ContactSubmission, NEWSLETTER_CHECK_ICON, NEWSLETTER_SUCCESS_TEXT,
    NewsletterStep, SUBMIT_RESET_DELAY_MS, newsletter_timeline,
};

/// Current value and attributes of a form control
struct FieldSnapshot {
    kind: FieldKind,
    name: String,
    required: bool,
    value: String,
}

impl FieldSnapshot {
    fn read(field: &Element) -> Self {
        if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            return Self {
                kind: FieldKind::classify(
                    &field.tag_name(),
                    None,
                    field.get_attribute("minlength").as_deref(),
                ),
                name: area.name(),
                required: area.required(),
                value: area.value(),
            };
        }
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            return Self {
                kind: FieldKind::classify(&field.tag_name(), Some(&input.type_()), None),
                name: input.name(),
                required: input.required(),
                value: input.value(),
            };
        }
        if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            return Self {
                kind: FieldKind::classify(&field.tag_name(), None, None),
                name: select.name(),
                required: select.required(),
                value: select.value(),
            };
        }
        Self {
            kind: FieldKind::Other,
            name: field.get_attribute("name").unwrap_or_default(),
            required: field.has_attribute("required"),
            value: field.get_attribute("value").unwrap_or_default(),
        }
    }

    fn as_input(&self) -> FieldInput<'_> {
        FieldInput {
            kind: self.kind,
            name: &self.name,
            required: self.required,
            value: &self.value,
        }
    }
}

/// The `.invalid-feedback` element right after a field, if any
fn feedback_of(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|el| el.class_list().contains("invalid-feedback"))
}

fn clear_validation(field: &Element) {
    set_class(field, "is-valid", false);
    set_class(field, "is-invalid", false);
    if let Some(feedback) = feedback_of(field) {
        set_class(&feedback, "show", false);
    }
}

/// Validate one control and reflect the outcome in its classes and feedback
fn validate_control(field: &Element) -> Result<(), FieldError> {
    clear_validation(field);

    let snapshot = FieldSnapshot::read(field);
    let outcome = validate_field(&snapshot.as_input());
    match &outcome {
        Ok(()) => set_class(field, "is-valid", true),
        Err(error) => {
            set_class(field, "is-invalid", true);
            // Any next sibling receives the message, not only `.invalid-feedback`
            if let Some(feedback) = field.next_element_sibling() {
                feedback.set_text_content(Some(&error.to_string()));
                set_class(&feedback, "show", true);
            }
        }
    }
    outcome
}

fn find_form(selector: &'static str) -> Result<HtmlFormElement, EffectError> {
    query_optional(selector)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        .ok_or(EffectError::MissingElement(selector))
}

/// Live validation and asynchronous submission of `.contact-form`
pub fn install_contact_form() -> Result<(), EffectError> {
    let form = find_form(".contact-form")?;
    let fields = Rc::new(query_all_in(&form, ".form-control"));

    for field in fields.iter() {
        let blurred = field.clone();
        listen(field, "blur", move |_| {
            let _ = validate_control(&blurred);
        })?;

        let edited = field.clone();
        listen(field, "input", move |_| {
            if edited.class_list().contains("is-invalid") {
                let _ = validate_control(&edited);
            }
        })?;
    }

    let submission = Rc::new(RefCell::new(ContactSubmission::new()));
    let submit_form = form.clone();

    listen(&form, "submit", move |event| {
        event.prevent_default();

        // Every field is validated so each one shows its feedback
        let outcomes: Vec<_> = fields.iter().map(validate_control).collect();
        if !all_valid(&outcomes) {
            return;
        }

        let Some(button) = submit_form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };

        let label = button.text_content().unwrap_or_default();
        if !submission.borrow_mut().begin(&label) {
            return;
        }
        apply_button(&button, &submission.borrow());

        let form = submit_form.clone();
        let fields = fields.clone();
        let submission = submission.clone();
        spawn_local(async move {
            let outcome = post_form(&form).await;
            if let Err(error) = &outcome {
                tracing::warn!("Form submission error: {}", error);
            }

            submission.borrow_mut().settle(outcome.is_ok());
            apply_button(&button, &submission.borrow());

            TimeoutFuture::new(SUBMIT_RESET_DELAY_MS).await;

            let plan = submission.borrow_mut().reset();
            apply_button(&button, &submission.borrow());
            if plan.is_some_and(|plan| plan.clear_form) {
                form.reset();
                fields.iter().for_each(clear_validation);
            }
        });
    })
}

/// Post the form's fields to its action
async fn post_form(form: &HtmlFormElement) -> Result<(), EffectError> {
    let body = FormData::new_with_form(form)?;
    let (header, value) = ACCEPT_JSON;

    let response = Request::post(&form.action())
        .header(header, value)
        .body(body)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(EffectError::Http(response.status()))
    }
}

fn apply_button(button: &HtmlButtonElement, submission: &ContactSubmission) {
    let look = submission.button();
    button.set_text_content(Some(&look.label));
    button.set_disabled(look.disabled);
    set_style(button, "background-color", look.background);
}

/// `.newsletter-form` sign-up with a transient confirmation
pub fn install_newsletter() -> Result<(), EffectError> {
    let form = find_form(".newsletter-form")?;
    let submit_form = form.clone();

    listen(&form, "submit", move |event| {
        event.prevent_default();

        let email_input = submit_form
            .query_selector(r#"input[type="email"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let button = submit_form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let (Some(email_input), Some(button)) = (email_input, button) else {
            return;
        };

        if !is_valid_email(email_input.value().trim()) {
            set_class(&email_input, "is-invalid", true);
            return;
        }

        set_class(&email_input, "is-invalid", false);
        set_class(&email_input, "is-valid", true);

        let original_html = button.inner_html();
        button.set_inner_html(NEWSLETTER_CHECK_ICON);
        button.set_disabled(true);

        let message = confirmation_message()
            .inspect_err(|error| tracing::debug!("newsletter confirmation not created: {}", error))
            .ok();

        let confirmation = Rc::new(NewsletterConfirmation {
            form: submit_form.clone(),
            email_input,
            button,
            original_html,
            message,
        });

        for (delay, step) in newsletter_timeline() {
            let confirmation = confirmation.clone();
            if delay == 0 {
                confirmation.apply(step);
            } else {
                after(delay, move || confirmation.apply(step));
            }
        }
    })
}

fn confirmation_message() -> Result<Element, EffectError> {
    let message = dom::document()?.create_element("div")?;
    message.set_class_name("newsletter-success");
    message.set_text_content(Some(NEWSLETTER_SUCCESS_TEXT));
    Ok(message)
}

/// Everything one newsletter confirmation touches over its lifetime
struct NewsletterConfirmation {
    form: HtmlFormElement,
    email_input: HtmlInputElement,
    button: HtmlButtonElement,
    original_html: String,
    message: Option<Element>,
}

impl NewsletterConfirmation {
    fn apply(&self, step: NewsletterStep) {
        match (step, &self.message) {
            (NewsletterStep::Insert, Some(message)) => {
                if let Ok(Some(existing)) = self.form.query_selector(".newsletter-success") {
                    existing.remove();
                }
                set_style(&self.form, "position", "relative");
                if let Err(error) = self.form.append_child(message) {
                    tracing::debug!("newsletter confirmation not inserted: {:?}", error);
                }
            }
            (NewsletterStep::Show, Some(message)) => set_class(message, "show", true),
            (NewsletterStep::Hide, Some(message)) => set_class(message, "show", false),
            (NewsletterStep::Remove, Some(message)) => {
                if message.parent_node().is_some() {
                    message.remove();
                }
            }
            (NewsletterStep::Restore, _) => {
                self.button.set_inner_html(&self.original_html);
                self.button.set_disabled(false);
                self.form.reset();
                set_class(&self.email_input, "is-valid", false);
            }
            (_, None) => {}
        }
    }
}
