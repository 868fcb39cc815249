//! Error types.
//!
//! Validation errors are per-field and user facing, so their `Display` text
//! is exactly what the form shows under the input.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// A single failed validation rule on a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
}

/// Failure reported by a [`Submitter`](crate::contact::Submitter), or by the
/// controller when the submitter does not settle in time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint answered and refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),
    /// The endpoint could not be reached.
    #[error("could not reach the contact endpoint: {0}")]
    Transport(String),
    /// No answer within the configured timeout.
    #[error("no response after {}ms", .0.as_millis())]
    TimedOut(Duration),
    /// The submission was abandoned before it settled.
    #[error("submission was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Problems loading or checking site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            ValidationError::PhoneInvalid.to_string(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn timeout_reports_millis() {
        let err = SubmitError::TimedOut(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "no response after 1500ms");
        assert_eq!(SubmitError::Cancelled.to_string(), "submission was cancelled");
    }
}
