use shared::{
    domain::{EmailAddress, SubmissionStatus},
    error::EmailError,
};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thanks! You're on the list.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    AlreadySending,
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Result of one relay round trip, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed { message: Option<String> },
}

/// Email capture form. Owns the field text, visibility, and submission status.
#[derive(Debug, Clone, Default)]
pub struct WaitlistForm {
    visible: bool,
    email: String,
    status: SubmissionStatus,
    message: Option<String>,
    focus_requested: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.status = SubmissionStatus::Idle;
        self.message = None;
        self.focus_requested = true;
    }

    /// True once after `open`, for the renderer to move focus to the field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        if self.status.is_in_flight() {
            return;
        }
        self.email = text.into();
        self.status = SubmissionStatus::Idle;
        self.message = None;
    }

    pub fn can_submit(&self) -> bool {
        self.visible && !self.status.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_in_flight() {
            "SENDING..."
        } else {
            "JOIN"
        }
    }

    /// Validates the field and moves to `Sending`. Rejected input leaves the
    /// status untouched and sets a local message instead.
    pub fn begin_submit(&mut self) -> Result<EmailAddress, SubmitRejection> {
        if self.status.is_in_flight() {
            return Err(SubmitRejection::AlreadySending);
        }
        match EmailAddress::parse(&self.email) {
            Ok(email) => {
                self.status = SubmissionStatus::Sending;
                self.message = None;
                Ok(email)
            }
            Err(err) => {
                self.message = Some(err.form_message().to_string());
                Err(err.into())
            }
        }
    }

    /// Applies the relay outcome. Ignored unless a submission is in flight.
    pub fn complete(&mut self, outcome: SubmissionOutcome) -> bool {
        if !self.status.is_in_flight() {
            return false;
        }
        match outcome {
            SubmissionOutcome::Accepted => {
                self.status = SubmissionStatus::Success;
                self.email.clear();
                self.message = Some(SUCCESS_MESSAGE.to_string());
            }
            SubmissionOutcome::Failed { message } => {
                self.status = SubmissionStatus::Error;
                self.message = Some(
                    message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
                );
            }
        }
        true
    }

    /// Resets the form. In-flight submissions cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.status.is_in_flight() {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
#[path = "tests/waitlist_tests.rs"]
mod tests;
