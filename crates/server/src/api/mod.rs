use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use shared::domain::EmailAddress;
use thiserror::Error;

use crate::{
    config::Settings,
    notifier::{MailAccount, Notifier, OutgoingEmail},
};

pub const MISSING_CONFIGURATION_MESSAGE: &str =
    "Missing mail configuration: MAIL_USER and/or MAIL_PASSWORD are not set.";
pub const SEND_FAILED_MESSAGE: &str = "Email failed to send. Please try again later.";

#[derive(Debug, Clone, Default)]
pub struct MailSettings {
    pub sender_name: String,
    pub account: Option<MailAccount>,
    pub waitlist_to: Option<String>,
}

impl MailSettings {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sender_name: settings.sender_name.clone(),
            account: settings.mail_account(),
            waitlist_to: settings.waitlist_to.clone(),
        }
    }

    fn recipient<'a>(&'a self, account: &'a MailAccount) -> &'a str {
        self.waitlist_to.as_deref().unwrap_or(&account.user)
    }
}

#[derive(Clone)]
pub struct RelayContext {
    pub mail: MailSettings,
    pub notifier: Arc<dyn Notifier>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request body is not a JSON object")]
    MalformedBody,
    #[error("email field is missing or not a string")]
    MissingEmail,
    #[error("email failed validation")]
    InvalidEmail,
    #[error("outgoing mail account is not configured")]
    MissingConfiguration,
    #[error("notification send failed: {0:#}")]
    SendFailed(anyhow::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody | Self::MissingEmail | Self::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingConfiguration | Self::SendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Never includes configuration values or
    /// provider errors.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MalformedBody => "Invalid request body",
            Self::MissingEmail => "Email is required",
            Self::InvalidEmail => "Invalid email",
            Self::MissingConfiguration => MISSING_CONFIGURATION_MESSAGE,
            Self::SendFailed(_) => SEND_FAILED_MESSAGE,
        }
    }
}

/// Pulls the submitted address out of a raw request body. An empty body reads
/// as `{}`.
pub fn parse_submission(body: &[u8]) -> Result<EmailAddress, RelayError> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice::<Value>(body).map_err(|_| RelayError::MalformedBody)?
    };
    let Value::Object(fields) = payload else {
        return Err(RelayError::MalformedBody);
    };

    let raw = fields
        .get("email")
        .and_then(Value::as_str)
        .filter(|raw| !raw.is_empty())
        .ok_or(RelayError::MissingEmail)?;

    EmailAddress::parse(raw).map_err(|_| RelayError::InvalidEmail)
}

/// Validates the body, checks configuration, then dispatches exactly one
/// notification.
pub async fn submit_waitlist(ctx: &RelayContext, body: &[u8]) -> Result<EmailAddress, RelayError> {
    let signup = parse_submission(body)?;
    let account = ctx
        .mail
        .account
        .as_ref()
        .ok_or(RelayError::MissingConfiguration)?;

    let message = OutgoingEmail::waitlist_signup(
        &ctx.mail.sender_name,
        account,
        ctx.mail.recipient(account),
        &signup,
    );
    ctx.notifier
        .send(account, &message)
        .await
        .map_err(RelayError::SendFailed)?;

    Ok(signup)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
