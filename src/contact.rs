use std::{cell::RefCell, future::Future, rc::Rc, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    notify::{NotificationKind, Notifier},
    timing::{Scheduler, Ticket},
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay responded with status {0}")]
    Status(u16),
    #[error("couldn't parse relay response: {0}")]
    MalformedResponse(String),
    #[error("relay rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated form, ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Form fields in submission order, including the relay's own
    /// `_subject`/`_template` controls.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
            ("_subject", format!("Portfolio contact: {}", self.subject)),
            ("_template", "table".to_string()),
        ]
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuccessFlag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawRelayResponse {
    success: SuccessFlag,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn from_json(body: &str) -> Result<Self, ContactError> {
        let raw: RawRelayResponse = serde_json::from_str(body)
            .map_err(|e| ContactError::MalformedResponse(e.to_string()))?;
        let success = match raw.success {
            SuccessFlag::Bool(b) => b,
            SuccessFlag::Text(s) => s.eq_ignore_ascii_case("true"),
        };
        Ok(Self {
            success,
            message: raw.message,
        })
    }
}

/// Outbound transport to the form relay.
pub trait FormRelay {
    fn post(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> impl Future<Output = Result<RelayResponse, ContactError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Sending(Ticket),
}

/// Submit control. A restore with a stale ticket (the timeout safeguard
/// firing after the real response) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    state: ButtonState,
    last_attempt: Ticket,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            state: ButtonState::Idle,
            last_attempt: Ticket::default(),
        }
    }
}

impl SubmitButton {
    pub const IDLE_LABEL: &'static str = "Send Message";
    pub const SENDING_LABEL: &'static str = "Sending...";

    pub fn begin(&mut self) -> Ticket {
        self.last_attempt = self.last_attempt.next();
        self.state = ButtonState::Sending(self.last_attempt);
        self.last_attempt
    }

    pub fn finish(&mut self, ticket: Ticket) -> bool {
        match self.state {
            ButtonState::Sending(current) if current == ticket => {
                self.state = ButtonState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, ButtonState::Sending(_))
    }

    pub fn label(&self) -> &'static str {
        if self.is_sending() {
            Self::SENDING_LABEL
        } else {
            Self::IDLE_LABEL
        }
    }
}

/// Wherever the submit button's state lives.
pub trait SubmitControl {
    fn begin(&self) -> Ticket;
    fn finish(&self, ticket: Ticket);
}

impl SubmitControl for Rc<RefCell<SubmitButton>> {
    fn begin(&self) -> Ticket {
        self.borrow_mut().begin()
    }

    fn finish(&self, ticket: Ticket) {
        self.borrow_mut().finish(ticket);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Sent,
    Failed(ContactError),
}

impl SubmitOutcome {
    /// True only for a delivered message.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

#[derive(Clone)]
pub struct ContactHandler<R, N, B, S> {
    pub relay: R,
    pub notifier: N,
    pub button: B,
    pub scheduler: S,
    pub endpoint: String,
    /// Restores the button if the relay never answers.
    pub timeout: Duration,
}

impl<R, N, B, S> ContactHandler<R, N, B, S>
where
    R: FormRelay,
    N: Notifier,
    B: SubmitControl + Clone + 'static,
    S: Scheduler,
{
    /// Validates and sends the form once. No retries; on failure the
    /// fields are left as they were.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        let ticket = self.button.begin();

        let submission = match form.validate() {
            Ok(s) => s,
            Err(e) => {
                self.notifier.notify(NotificationKind::Error, &e.to_string());
                self.button.finish(ticket);
                return SubmitOutcome::Invalid(e);
            }
        };

        let safeguard = self.button.clone();
        self.scheduler
            .after(self.timeout, Box::new(move || safeguard.finish(ticket)));

        let result = self
            .relay
            .post(&self.endpoint, &submission.fields())
            .await
            .and_then(|res| {
                if res.success {
                    Ok(res)
                } else {
                    Err(ContactError::Rejected(res.message.unwrap_or_default()))
                }
            });
        self.button.finish(ticket);

        match result {
            Ok(_) => {
                form.clear();
                self.notifier
                    .notify(NotificationKind::Success, SUCCESS_MESSAGE);
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.notifier.notify(NotificationKind::Error, FAILURE_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
