use std::fmt;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::domain::EmailAddress;
use url::Url;

pub const SIGNUP_SUBJECT: &str = "New Waitlist Signup";

/// Outgoing account used to authenticate against the mail provider.
#[derive(Clone, PartialEq, Eq)]
pub struct MailAccount {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for MailAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailAccount")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingEmail {
    pub fn waitlist_signup(
        sender_name: &str,
        account: &MailAccount,
        to: &str,
        signup: &EmailAddress,
    ) -> Self {
        let address = signup.as_str();
        let escaped = escape_html(address);
        Self {
            from: format!("{sender_name} <{}>", account.user),
            to: to.to_string(),
            reply_to: address.to_string(),
            subject: SIGNUP_SUBJECT.to_string(),
            text: format!("New waitlist signup: {address}"),
            html: format!(
                concat!(
                    "<div style=\"font-family: Arial, sans-serif; line-height: 1.5;\">",
                    "<h2 style=\"margin: 0 0 12px;\">New Waitlist Signup</h2>",
                    "<p style=\"margin: 0 0 6px;\"><b>Email:</b> {escaped}</p>",
                    "<p style=\"margin: 0; color: #666;\">Sent from the Prelaunch waitlist form.</p>",
                    "</div>"
                ),
                escaped = escaped
            ),
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, account: &MailAccount, message: &OutgoingEmail) -> anyhow::Result<()>;
}

/// Posts messages as JSON to a transactional mail HTTP API using basic auth.
#[derive(Debug, Clone)]
pub struct HttpMailApi {
    http: Client,
    endpoint: Url,
}

impl HttpMailApi {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid mail api url '{endpoint}'"))?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Notifier for HttpMailApi {
    async fn send(&self, account: &MailAccount, message: &OutgoingEmail) -> anyhow::Result<()> {
        self.http
            .post(self.endpoint.clone())
            .basic_auth(&account.user, Some(&account.password))
            .json(message)
            .send()
            .await
            .context("mail api request failed")?
            .error_for_status()
            .context("mail api rejected message")?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use anyhow::anyhow;

    use super::*;

    /// Records every message instead of sending it.
    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        log: Mutex<Vec<(MailAccount, OutgoingEmail)>>,
    }

    impl RecordingNotifier {
        pub(crate) fn sent(&self) -> Vec<(MailAccount, OutgoingEmail)> {
            self.log.lock().expect("log lock").clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, account: &MailAccount, message: &OutgoingEmail) -> anyhow::Result<()> {
            self.log
                .lock()
                .expect("log lock")
                .push((account.clone(), message.clone()));
            Ok(())
        }
    }

    pub(crate) struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _account: &MailAccount, _message: &OutgoingEmail) -> anyhow::Result<()> {
            Err(anyhow!("smtp auth rejected for secret-password"))
        }
    }
}

#[cfg(test)]
#[path = "tests/notifier_tests.rs"]
mod tests;
