//! Contact form.
//!
//! [`ContactForm`] is the synchronous state machine:
//!
//! ```text
//! Editing --submit (valid)--> Submitting --ok--> Submitted
//!    ^  \--submit (invalid): errors set           |
//!    |                                            |
//!    +----------- failure (fields kept) ----------+ (from Submitting)
//!    +----------- reset ("send another") ---------+ (from Submitted)
//! ```
//!
//! [`ContactController`] adds the asynchronous half: it hands validated
//! fields to a [`Submitter`] and feeds the result back into the form.

mod controller;
mod validate;

pub use controller::{ContactController, SimulatedSubmitter, SubmitOutcome, Submitter};
pub use validate::{check_email, check_message, check_name, check_phone, validate};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SubmitError, ValidationError};

/// Service preselected in a fresh form.
pub const DEFAULT_SERVICE: &str = "web-development";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
    Service,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Phone,
        Field::Message,
        Field::Service,
    ];

    /// Input `name`/`id` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Service => "service",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation errors. Only failing fields have an entry.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub service: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            phone: String::new(),
            message: String::new(),
            service: DEFAULT_SERVICE.to_string(),
        }
    }
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Service => &self.service,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::Service => &mut self.service,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Why [`ContactForm::begin_submit`] did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is in flight or already succeeded.
    NotEditing,
    /// The validation pass failed; the errors are now on the form.
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    phase: Phase,
    last_failure: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// The failure of the last submission attempt, until the next edit or submit.
    pub fn last_failure(&self) -> Option<&SubmitError> {
        self.last_failure.as_ref()
    }

    /// Keystroke update. Clears this field's error (and only this one).
    ///
    /// Ignored outside of Editing; returns whether the edit was applied.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.phase != Phase::Editing {
            return false;
        }
        self.fields.set(field, value);
        self.errors.remove(&field);
        self.last_failure = None;
        true
    }

    /// Validate and, if clean, enter Submitting and hand back the fields to send.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitRejection> {
        if self.phase != Phase::Editing {
            return Err(SubmitRejection::NotEditing);
        }
        self.last_failure = None;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }
        self.phase = Phase::Submitting;
        Ok(self.fields.clone())
    }

    /// Settle an in-flight submission. Ignored unless Submitting.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors.clear();
                self.phase = Phase::Submitted;
            }
            Err(err) => {
                self.last_failure = Some(err);
                self.phase = Phase::Editing;
            }
        }
    }

    /// "Send another message": back to an empty editable form.
    ///
    /// Only valid from Submitted; returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if self.phase != Phase::Submitted {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "John Doe");
        form.set_field(Field::Email, "john@example.com");
        form.set_field(Field::Message, "This is a long enough message");
        form
    }

    #[test]
    fn fresh_form_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().service, DEFAULT_SERVICE);
        assert!(form.fields().name.is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("avatar"), None);
    }

    #[test]
    fn invalid_submit_stays_editing() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "A");
        let rejection = form.begin_submit().unwrap_err();
        let SubmitRejection::Invalid(errors) = rejection else {
            panic!("expected validation failure");
        };
        assert!(errors.contains_key(&Field::Name));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.error(Field::Name), Some(ValidationError::NameTooShort));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "nope");
        let _ = form.begin_submit();
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Name).is_some());

        form.set_field(Field::Email, "john@example.com");
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(
            form.error(Field::Message),
            Some(ValidationError::MessageRequired)
        );
    }

    #[test]
    fn successful_round_trip() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "John Doe");
        assert!(form.is_submitting());

        form.finish_submit(Ok(()));
        assert!(form.is_submitted());
        assert_eq!(form.fields(), &ContactFields::default());

        assert!(form.reset());
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn second_submit_while_submitting_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejection::NotEditing));
        assert!(form.is_submitting());
    }

    #[test]
    fn edits_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(!form.set_field(Field::Name, "Someone Else"));
        assert_eq!(form.fields().name, "John Doe");
    }

    #[test]
    fn failure_keeps_fields_and_records_error() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmitError::Transport("offline".into())));

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().email, "john@example.com");
        assert_eq!(
            form.last_failure(),
            Some(&SubmitError::Transport("offline".into()))
        );

        form.set_field(Field::Company, "Acme");
        assert_eq!(form.last_failure(), None);
    }

    #[test]
    fn reset_only_from_submitted() {
        let mut form = filled();
        assert!(!form.reset());
        assert_eq!(form.fields().name, "John Doe");
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().name, "John Doe");
    }
}
