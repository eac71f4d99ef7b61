//! Contact and newsletter forms: client-side validation and the
//! `{success, message}` response contract of the site endpoints.
//!
//! Submission itself lives in `folio-transport`; this module decides what is
//! sent and which toast the user sees afterwards.

use crate::toast::{ToastKind, ToastQueue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Loose shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Which endpoint a submission targets. The two differ in their fallback
/// texts and in how a non-JSON reply is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn path(self) -> &'static str {
        match self {
            FormKind::Contact => "/contact",
            FormKind::Newsletter => "/newsletter",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            FormKind::Contact => "Thank you! Your message has been sent.",
            FormKind::Newsletter => "Thank you for subscribing!",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            FormKind::Contact => "Something went wrong. Please try again.",
            FormKind::Newsletter => "Subscription failed. Please try again.",
        }
    }

    fn network_text(self) -> &'static str {
        match self {
            FormKind::Contact => "Network error. Please check your connection and try again.",
            FormKind::Newsletter => "Network error. Please try again later.",
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Build from raw field values; every field is trimmed.
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Name, email and message are required; subject is optional.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn new(email: &str) -> Self {
        Self { email: email.trim().to_string() }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// JSON reply of `/contact` and `/newsletter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    /// Decode a reply body.
    ///
    /// The contact endpoint may answer a plain redirect or an HTML page; such
    /// a body is read as `{ success: <status was 2xx> }`. The newsletter
    /// endpoint always answers JSON, so a bad body there is an error.
    pub fn parse(kind: FormKind, status_ok: bool, body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<SubmitResponse>(body) {
            Ok(r) => Ok(r),
            Err(_) if kind == FormKind::Contact => Ok(Self { success: status_ok, message: None }),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What the user is told after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the submission. The form should be reset.
    Accepted(String),
    /// The server answered `success: false`.
    Rejected(String),
    /// The request never produced a usable reply.
    Failed(String),
}

impl SubmitOutcome {
    /// Classify a transport result. Server-provided messages win over the
    /// built-in texts; transport error details are logged, not shown.
    pub fn classify<E: std::fmt::Display>(
        kind: FormKind,
        result: Result<SubmitResponse, E>,
    ) -> Self {
        match result {
            Ok(SubmitResponse { success: true, message }) => {
                SubmitOutcome::Accepted(message.unwrap_or_else(|| kind.success_text().into()))
            }
            Ok(SubmitResponse { success: false, message }) => {
                SubmitOutcome::Rejected(message.unwrap_or_else(|| kind.failure_text().into()))
            }
            Err(e) => {
                tracing::warn!(error = %e, endpoint = kind.path(), "form submission failed");
                SubmitOutcome::Failed(kind.network_text().into())
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Accepted(m) | SubmitOutcome::Rejected(m) | SubmitOutcome::Failed(m) => m,
        }
    }

    pub fn toast_kind(&self) -> ToastKind {
        match self {
            SubmitOutcome::Accepted(_) => ToastKind::Success,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => ToastKind::Error,
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// Push the matching toast.
    pub fn notify(&self, toasts: &mut ToastQueue) -> u64 {
        toasts.show(self.message(), self.toast_kind())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
