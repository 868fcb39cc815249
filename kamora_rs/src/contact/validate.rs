//! Submit-time validation rules for the contact form.

use std::sync::OnceLock;

use regex::Regex;

use super::{ContactFields, Field, FieldErrors};
use crate::error::ValidationError;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// `local@domain.tld`: no whitespace, one `@`, a dot with text on both sides.
fn regex_email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))
}

/// Digits, whitespace, dashes and parentheses, with an optional leading `+`.
fn regex_phone() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\+?[0-9\s\-()]+$"))
}

/// Run every rule and collect one error per failing field.
///
/// Company and service are free-form and never produce an error.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let checks = [
        (Field::Name, check_name(&fields.name)),
        (Field::Email, check_email(&fields.email)),
        (Field::Message, check_message(&fields.message)),
        (Field::Phone, check_phone(&fields.phone)),
    ];
    for (field, outcome) in checks {
        if let Err(err) = outcome {
            errors.insert(field, err);
        }
    }
    errors
}

pub fn check_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(ValidationError::NameRequired)
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        Err(ValidationError::NameTooShort)
    } else {
        Ok(())
    }
}

/// The shape check runs on the raw value, so surrounding spaces fail it.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !regex_email().is_match(email) {
        Err(ValidationError::EmailInvalid)
    } else {
        Ok(())
    }
}

pub fn check_message(message: &str) -> Result<(), ValidationError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MessageRequired)
    } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        Err(ValidationError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// Optional: an empty phone is fine.
pub fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || regex_phone().is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::PhoneInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            message: "This is a long enough message".into(),
            ..ContactFields::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.get(&Field::Name), Some(&ValidationError::NameRequired));
        assert_eq!(errors.get(&Field::Email), Some(&ValidationError::EmailRequired));
        assert_eq!(
            errors.get(&Field::Message),
            Some(&ValidationError::MessageRequired)
        );
        assert!(!errors.contains_key(&Field::Phone));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn short_name_is_rejected() {
        let mut fields = valid_fields();
        fields.name = "A".into();
        let errors = validate(&fields);
        assert_eq!(errors.get(&Field::Name), Some(&ValidationError::NameTooShort));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn name_length_is_measured_after_trimming() {
        assert_eq!(check_name("  A  "), Err(ValidationError::NameTooShort));
        assert_eq!(check_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(check_name(" Jo "), Ok(()));
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        assert_eq!(check_name("Łu"), Ok(()));
        assert_eq!(check_name("Ł"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn bad_email_only_flags_email() {
        let mut fields = valid_fields();
        fields.email = "not-an-email".into();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Email), Some(&ValidationError::EmailInvalid));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@host.io"] {
            assert_eq!(check_email(ok), Ok(()), "{ok}");
        }
        for bad in [
            "a@b",
            "a@@b.com",
            "a@b@c.com",
            "@b.com",
            "a@.com",
            "a@b.",
            " a@b.com",
            "a b@c.com",
        ] {
            assert_eq!(check_email(bad), Err(ValidationError::EmailInvalid), "{bad}");
        }
    }

    #[test]
    fn message_needs_ten_chars() {
        assert_eq!(check_message("too short"), Err(ValidationError::MessageTooShort));
        assert_eq!(check_message("   exactly 10   "), Ok(()));
        assert_eq!(check_message("   nine char "), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn phone_is_optional_but_checked() {
        assert_eq!(check_phone(""), Ok(()));
        assert_eq!(check_phone("+1 (555) 123-4567"), Ok(()));
        assert_eq!(check_phone("555-0100"), Ok(()));
        assert_eq!(check_phone("call me"), Err(ValidationError::PhoneInvalid));
        assert_eq!(check_phone("12+34"), Err(ValidationError::PhoneInvalid));
    }

    #[test]
    fn company_and_service_are_free_form() {
        let mut fields = valid_fields();
        fields.company = "!!!".into();
        fields.service = String::new();
        assert!(validate(&fields).is_empty());
    }
}
