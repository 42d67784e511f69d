//! Contact form model.
//!
//! Field values, per-field validation and the submission status shown in the
//! result banner. The network call itself lives behind
//! [`crate::relay::FormRelay`]; this module only tracks what the visitor sees.

use crate::relay::{RelayConfig, RelayError, RelayForm};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

// Lookaheads are not supported by `regex`; leading dots and ".." are rejected
// separately in `is_valid_email`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// The four visitor-editable fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form-data key and input `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email address",
            Field::Subject => "What's this about?",
            Field::Message => "Tell us how we can help you...",
        }
    }

    fn min_chars(self) -> Option<usize> {
        match self {
            Field::Name => Some(2),
            Field::Subject => Some(5),
            Field::Message => Some(10),
            Field::Email => None,
        }
    }

    /// First rule `value` breaks, if any.
    pub fn check(self, value: &str) -> Result<(), ValidationError> {
        if self == Field::Email {
            return if is_valid_email(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail)
            };
        }
        match self.min_chars() {
            Some(min) if value.chars().count() < min => Err(ValidationError::TooShort {
                label: self.label(),
                min,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

/// A broken field rule. `Display` is the inline message shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Errors keyed by field, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn set(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(field, err);
            }
        }
    }
}

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, field.check(self.get(field)));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Outcome banner state. Held until the next submission starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Why a submit press did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("{0} field(s) failed validation")]
    Invalid(usize),
}

/// Everything the contact form component renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    values: ContactValues,
    errors: FieldErrors,
    status: SubmitStatus,
    submitting: bool,
    // after the first submit press, edits re-validate their own field
    attempted: bool,
}

impl ContactFormState {
    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = self.values.slot(field);
        *slot = value.into();
        if self.attempted {
            let result = field.check(slot);
            self.errors.set(field, result);
        }
    }

    /// Validate and, if clean, mark a request as in flight.
    ///
    /// The returned form is what must be handed to the relay; the outcome has
    /// to come back through [`Self::finish_submit`].
    pub fn begin_submit(&mut self, config: &RelayConfig) -> Result<RelayForm, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.attempted = true;
        if let Err(errors) = self.values.validate() {
            let count = errors.len();
            tracing::debug!(invalid = count, "contact form failed validation");
            self.errors = errors;
            return Err(SubmitRejected::Invalid(count));
        }

        self.errors = FieldErrors::default();
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Ok(RelayForm::new(&self.values, config))
    }

    /// Record the relay outcome. Success clears the form; failure keeps it.
    pub fn finish_submit(&mut self, outcome: Result<(), RelayError>) -> SubmitStatus {
        self.submitting = false;
        self.status = match outcome {
            Ok(()) => {
                tracing::info!("contact message relayed");
                self.values = ContactValues::default();
                self.errors = FieldErrors::default();
                self.attempted = false;
                SubmitStatus::Success
            }
            Err(e) => {
                tracing::error!(error = %e, "error sending contact message");
                SubmitStatus::Error
            }
        };
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(name: &str, email: &str, subject: &str, message: &str) -> ContactValues {
        ContactValues {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn minimal_valid_message_passes() {
        let v = values("Al", "a@b.com", "Hello there", "This is a test message.");
        assert_eq!(v.validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactValues::default().validate().unwrap_err();
        let messages: Vec<String> = errors.iter().map(|(_, e)| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Name must be at least 2 characters.",
                "Please enter a valid email address.",
                "Subject must be at least 5 characters.",
                "Message must be at least 10 characters.",
            ]
        );
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        assert!(Field::Name.check("Zé").is_ok());
        assert!(Field::Name.check("Z").is_err());
        assert!(Field::Subject.check("Hello").is_ok());
        assert!(Field::Message.check("123456789").is_err());
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.com", "first.last+tag@mail.example.org", "O'Neil@school.edu"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "",
            "not-an-email",
            "a@b",
            "a@b.c",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a@-b.com",
            "a b@c.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn edits_revalidate_only_after_first_attempt() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "A");
        assert!(state.errors().is_empty());

        let rejected = state.begin_submit(&RelayConfig::default());
        assert_eq!(rejected, Err(SubmitRejected::Invalid(4)));
        assert!(state.error(Field::Name).is_some());

        state.set_field(Field::Name, "Al");
        assert!(state.error(Field::Name).is_none());
        assert!(state.error(Field::Email).is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "Al");
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Subject, "Hello there");
        state.set_field(Field::Message, "This is a test message.");

        assert!(state.begin_submit(&RelayConfig::default()).is_ok());
        assert!(state.is_submitting());
        assert_eq!(
            state.begin_submit(&RelayConfig::default()),
            Err(SubmitRejected::InFlight)
        );
    }

    #[test]
    fn new_submission_resets_previous_banner() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "Al");
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Subject, "Hello there");
        state.set_field(Field::Message, "This is a test message.");

        state.begin_submit(&RelayConfig::default()).expect("valid");
        state.finish_submit(Err(RelayError::Rejected { status: 502 }));
        assert_eq!(state.status(), SubmitStatus::Error);

        state.begin_submit(&RelayConfig::default()).expect("still valid");
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[test]
    fn success_clears_values_and_errors() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "Al");
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Subject, "Hello there");
        state.set_field(Field::Message, "This is a test message.");
        state.begin_submit(&RelayConfig::default()).expect("valid");

        assert_eq!(state.finish_submit(Ok(())), SubmitStatus::Success);
        assert_eq!(state.values(), &ContactValues::default());
        assert!(state.errors().is_empty());

        // fresh form: typing does not resurface errors until the next press
        state.set_field(Field::Name, "A");
        assert!(state.errors().is_empty());
    }
}
