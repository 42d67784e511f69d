//! Form relay protocol.
//!
//! The site has no backend. Contact messages are POSTed as multipart form
//! data to a third-party relay which forwards them by email. The relay is
//! opaque: an ok status means delivered, anything else is a failure.

use crate::contact::{ContactFormState, ContactValues, SubmitRejected, SubmitStatus};
use serde::Deserialize;
use std::future::Future;
use thiserror::Error;

/// Where and how contact messages are relayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    /// Subject line of the forwarded email (`_subject`).
    pub subject_line: String,
    /// Relay email layout (`_template`).
    pub template: String,
    /// Whether the relay shows its CAPTCHA page (`_captcha`).
    pub captcha: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formsubmit.co/d6494e93d993a930e148f6e40a07ad0b".into(),
            subject_line: "New Contact Form Submission".into(),
            template: "table".into(),
            captcha: false,
        }
    }
}

/// Why a relay call did not deliver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay answered with HTTP {status}")]
    Rejected { status: u16 },

    #[error("relay unreachable: {0}")]
    Transport(String),
}

/// One ready-to-send multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayForm {
    endpoint: String,
    fields: Vec<(&'static str, String)>,
}

impl RelayForm {
    /// Visitor fields first, then the relay control fields.
    pub fn new(values: &ContactValues, config: &RelayConfig) -> Self {
        let fields = vec![
            ("name", values.name.clone()),
            ("email", values.email.clone()),
            ("subject", values.subject.clone()),
            ("message", values.message.clone()),
            ("_subject", config.subject_line.clone()),
            ("_template", config.template.clone()),
            ("_captcha", config.captcha.to_string()),
        ];
        Self {
            endpoint: config.endpoint.clone(),
            fields,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transport that delivers a [`RelayForm`].
///
/// The browser implementation uses `fetch`; tests use in-memory fakes.
pub trait FormRelay {
    fn post(&self, form: &RelayForm) -> impl Future<Output = Result<(), RelayError>>;
}

/// Validate, send and record the outcome of one contact submission.
///
/// Validation failures and double submissions never reach the relay.
pub async fn submit_contact<R: FormRelay>(
    state: &mut ContactFormState,
    relay: &R,
    config: &RelayConfig,
) -> Result<SubmitStatus, SubmitRejected> {
    let form = state.begin_submit(config)?;
    let outcome = relay.post(&form).await;
    Ok(state.finish_submit(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records every form and answers with a canned outcome.
    struct FakeRelay {
        outcome: Result<(), RelayError>,
        sent: RefCell<Vec<RelayForm>>,
    }

    impl FakeRelay {
        fn answering(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormRelay for FakeRelay {
        async fn post(&self, form: &RelayForm) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(form.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "Al");
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Subject, "Hello there");
        state.set_field(Field::Message, "This is a test message.");
        state
    }

    #[test]
    fn form_carries_visitor_and_control_fields_in_order() {
        let form = RelayForm::new(filled().values(), &RelayConfig::default());
        let keys: Vec<_> = form.fields().iter().map(|(key, _)| *key).collect();

        assert_eq!(
            keys,
            vec!["name", "email", "subject", "message", "_subject", "_template", "_captcha"]
        );
        assert_eq!(form.get("_captcha"), Some("false"));
        assert_eq!(form.get("_subject"), Some("New Contact Form Submission"));
        assert_eq!(form.get("message"), Some("This is a test message."));
        assert!(form.endpoint().starts_with("https://formsubmit.co/"));
    }

    #[test]
    fn valid_submission_reaches_relay_and_clears_form() {
        let relay = FakeRelay::answering(Ok(()));
        let mut state = filled();

        let status = block_on(submit_contact(&mut state, &relay, &RelayConfig::default()));

        assert_eq!(status, Ok(SubmitStatus::Success));
        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(state.values(), &ContactValues::default());
        assert!(!state.is_submitting());
    }

    #[test]
    fn rejected_submission_keeps_values() {
        let relay = FakeRelay::answering(Err(RelayError::Rejected { status: 500 }));
        let mut state = filled();
        let before = state.values().clone();

        let status = block_on(submit_contact(&mut state, &relay, &RelayConfig::default()));

        assert_eq!(status, Ok(SubmitStatus::Error));
        assert_eq!(state.values(), &before);
        assert_eq!(state.status(), SubmitStatus::Error);
    }

    #[test]
    fn transport_failure_maps_to_error() {
        let relay = FakeRelay::answering(Err(RelayError::Transport("offline".into())));
        let mut state = filled();

        let status = block_on(submit_contact(&mut state, &relay, &RelayConfig::default()));
        assert_eq!(status, Ok(SubmitStatus::Error));
    }

    #[test]
    fn invalid_email_never_hits_the_network() {
        let relay = FakeRelay::answering(Ok(()));
        let mut state = filled();
        state.set_field(Field::Email, "not-an-email");

        let status = block_on(submit_contact(&mut state, &relay, &RelayConfig::default()));

        assert!(matches!(status, Err(SubmitRejected::Invalid(1))));
        assert!(relay.sent.borrow().is_empty());
        assert_eq!(
            state.error(Field::Email).map(ToString::to_string),
            Some("Please enter a valid email address.".to_string())
        );
    }

    #[test]
    fn error_messages_describe_the_failure() {
        assert_eq!(
            RelayError::Rejected { status: 403 }.to_string(),
            "relay answered with HTTP 403"
        );
        assert_eq!(
            RelayError::Transport("dns".into()).to_string(),
            "relay unreachable: dns"
        );
    }
}
