//! Contact and newsletter field validation
//!
//! Rules are applied to the trimmed field value. The outcome decides which
//! of the `is-valid` / `is-invalid` classes the field gets and which message
//! shows up in the feedback element next to it.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum message length when the textarea has no `minlength`
pub const DEFAULT_MESSAGE_MIN_LENGTH: usize = 10;

/// Minimum length of the `name` field
pub const MIN_NAME_LENGTH: usize = 2;

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Check an address against the site's email pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Kind of form control being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="text">`
    Text,
    /// `<input type="email">`
    Email,
    /// `<textarea>` with its minimum length
    TextArea { min_length: usize },
    /// Anything else (select, tel, ...)
    Other,
}

impl FieldKind {
    /// Classify a control from its tag name, `type` and `minlength` attributes
    pub fn classify(tag_name: &str, input_type: Option<&str>, min_length: Option<&str>) -> Self {
        if tag_name.eq_ignore_ascii_case("textarea") {
            let min_length = min_length
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .filter(|len| *len > 0)
                .unwrap_or(DEFAULT_MESSAGE_MIN_LENGTH);
            return FieldKind::TextArea { min_length };
        }

        match input_type.map(|t| t.to_ascii_lowercase()).as_deref() {
            Some("email") => FieldKind::Email,
            // An input without a type attribute is a text input
            Some("text") | None if tag_name.eq_ignore_ascii_case("input") => FieldKind::Text,
            _ => FieldKind::Other,
        }
    }
}

/// Snapshot of a field at validation time
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInput<'a> {
    pub kind: FieldKind,
    pub name: &'a str,
    pub required: bool,
    pub value: &'a str,
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The name field is empty
    NameMissing,
    /// A required field is empty
    Required,
    /// The name is shorter than two characters
    NameTooShort,
    /// The email field is empty
    EmailMissing,
    /// The email doesn't look like an address
    EmailInvalid,
    /// The message is empty
    MessageMissing,
    /// The message is shorter than its minimum
    MessageTooShort { min: usize },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::NameMissing => write!(f, "Please enter your name."),
            FieldError::Required => write!(f, "This field is required."),
            FieldError::NameTooShort => write!(
                f,
                "Name must be at least {} characters long.",
                MIN_NAME_LENGTH
            ),
            FieldError::EmailMissing => write!(f, "Please enter your email address."),
            FieldError::EmailInvalid => write!(f, "Please enter a valid email address."),
            FieldError::MessageMissing => write!(f, "Please enter your message."),
            FieldError::MessageTooShort { min } => {
                write!(f, "Message must be at least {} characters long.", min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Validate one field.
///
/// Minimum lengths are counted in `char`s after trimming, not in UTF-16 units.
pub fn validate_field(field: &FieldInput<'_>) -> Result<(), FieldError> {
    let value = field.value.trim();
    let length = value.chars().count();

    match field.kind {
        FieldKind::Text => {
            if field.required && value.is_empty() {
                Err(if field.name == "name" {
                    FieldError::NameMissing
                } else {
                    FieldError::Required
                })
            } else if field.name == "name" && length < MIN_NAME_LENGTH {
                Err(FieldError::NameTooShort)
            } else {
                Ok(())
            }
        }
        FieldKind::Email => {
            if value.is_empty() {
                Err(FieldError::EmailMissing)
            } else if !is_valid_email(value) {
                Err(FieldError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FieldKind::TextArea { min_length } => {
            if value.is_empty() {
                Err(FieldError::MessageMissing)
            } else if length < min_length {
                Err(FieldError::MessageTooShort { min: min_length })
            } else {
                Ok(())
            }
        }
        FieldKind::Other => {
            if field.required && value.is_empty() {
                Err(FieldError::Required)
            } else {
                Ok(())
            }
        }
    }
}

/// Whether a batch of outcomes allows submission.
///
/// Callers validate every field first so each one gets its feedback shown.
pub fn all_valid(outcomes: &[Result<(), FieldError>]) -> bool {
    outcomes.iter().all(Result::is_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<'a>(name: &'a str, required: bool, value: &'a str) -> FieldInput<'a> {
        FieldInput {
            kind: FieldKind::Text,
            name,
            required,
            value,
        }
    }

    fn email(value: &str) -> FieldInput<'_> {
        FieldInput {
            kind: FieldKind::Email,
            name: "email",
            required: true,
            value,
        }
    }

    fn message(value: &str, min_length: usize) -> FieldInput<'_> {
        FieldInput {
            kind: FieldKind::TextArea { min_length },
            name: "message",
            required: true,
            value,
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("bob@x.com"));
        assert!(is_valid_email("user@site.org"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("bob@x"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_required_text_field_empty() {
        assert_eq!(
            validate_field(&text("subject", true, "   ")),
            Err(FieldError::Required)
        );
        assert_eq!(
            FieldError::Required.to_string(),
            "This field is required."
        );
    }

    #[test]
    fn test_required_name_empty() {
        let err = validate_field(&text("name", true, "")).unwrap_err();
        assert_eq!(err, FieldError::NameMissing);
        assert_eq!(err.to_string(), "Please enter your name.");
    }

    #[test]
    fn test_name_too_short() {
        let err = validate_field(&text("name", true, "a")).unwrap_err();
        assert_eq!(err, FieldError::NameTooShort);
        assert!(err.to_string().contains("at least 2 characters"));
    }

    #[test]
    fn test_optional_empty_name_is_still_too_short() {
        assert_eq!(
            validate_field(&text("name", false, "")),
            Err(FieldError::NameTooShort)
        );
    }

    #[test]
    fn test_optional_text_field_empty_is_valid() {
        assert_eq!(validate_field(&text("company", false, "")), Ok(()));
    }

    #[test]
    fn test_valid_name() {
        assert_eq!(validate_field(&text("name", true, " Jo ")), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_field(&email("bob@x.com")), Ok(()));
        assert_eq!(validate_field(&email("bob@x")), Err(FieldError::EmailInvalid));
        assert_eq!(validate_field(&email("  ")), Err(FieldError::EmailMissing));
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_email_is_trimmed_before_matching() {
        assert_eq!(validate_field(&email("  bob@x.com  ")), Ok(()));
    }

    #[test]
    fn test_message_too_short_mentions_minimum() {
        let err = validate_field(&message("hello", 10)).unwrap_err();
        assert_eq!(err, FieldError::MessageTooShort { min: 10 });
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(
            validate_field(&message("", 10)),
            Err(FieldError::MessageMissing)
        );
        assert_eq!(validate_field(&message("long enough!", 10)), Ok(()));
        assert_eq!(validate_field(&message("hi there", 4)), Ok(()));
    }

    #[test]
    fn test_other_field_required() {
        let field = FieldInput {
            kind: FieldKind::Other,
            name: "budget",
            required: true,
            value: "",
        };
        assert_eq!(validate_field(&field), Err(FieldError::Required));

        let optional = FieldInput {
            required: false,
            ..field
        };
        assert_eq!(validate_field(&optional), Ok(()));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            FieldKind::classify("TEXTAREA", None, None),
            FieldKind::TextArea { min_length: 10 }
        );
        assert_eq!(
            FieldKind::classify("textarea", None, Some("25")),
            FieldKind::TextArea { min_length: 25 }
        );
        assert_eq!(
            FieldKind::classify("textarea", None, Some("lots")),
            FieldKind::TextArea { min_length: 10 }
        );
        assert_eq!(FieldKind::classify("INPUT", Some("email"), None), FieldKind::Email);
        assert_eq!(FieldKind::classify("INPUT", Some("text"), None), FieldKind::Text);
        assert_eq!(FieldKind::classify("INPUT", None, None), FieldKind::Text);
        assert_eq!(FieldKind::classify("INPUT", Some("tel"), None), FieldKind::Other);
        assert_eq!(FieldKind::classify("SELECT", None, None), FieldKind::Other);
    }

    #[test]
    fn test_every_field_is_checked() {
        let outcomes: Vec<_> = [
            text("name", true, "a"),
            email("bob@x"),
            message("long enough message", 10),
        ]
        .iter()
        .map(validate_field)
        .collect();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_err());
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].is_ok());
        assert!(!all_valid(&outcomes));
    }

    #[test]
    fn test_all_valid() {
        let outcomes: Vec<_> = [
            text("name", true, "Ada"),
            email("ada@example.com"),
            message("I'd like a quote.", 10),
        ]
        .iter()
        .map(validate_field)
        .collect();
        assert!(all_valid(&outcomes));
    }

    #[test]
    fn test_required_select_on_placeholder_option() {
        let placeholder = FieldInput {
            kind: FieldKind::classify("SELECT", None, None),
            name: "budget",
            required: true,
            value: "",
        };
        assert_eq!(validate_field(&placeholder), Err(FieldError::Required));

        let chosen = FieldInput {
            value: "5k-10k",
            ..placeholder
        };
        assert_eq!(validate_field(&chosen), Ok(()));
    }
}
