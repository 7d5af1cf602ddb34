use std::{fmt, fs};

use serde::Deserialize;
use tracing::warn;

use crate::notifier::MailAccount;

pub const SETTINGS_FILE: &str = "relay.toml";

#[derive(Clone)]
pub struct Settings {
    pub server_bind: String,
    pub mail_api_url: String,
    pub mail_user: Option<String>,
    pub mail_password: Option<String>,
    pub waitlist_to: Option<String>,
    pub sender_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8888".into(),
            mail_api_url: "http://127.0.0.1:8025/api/send".into(),
            mail_user: None,
            mail_password: None,
            waitlist_to: None,
            sender_name: "Pictura Waitlist".into(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server_bind", &self.server_bind)
            .field("mail_api_url", &self.mail_api_url)
            .field("mail_user", &self.mail_user)
            .field(
                "mail_password",
                &self.mail_password.as_ref().map(|_| "<redacted>"),
            )
            .field("waitlist_to", &self.waitlist_to)
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

impl Settings {
    /// Both halves of the outgoing account, or `None` if either is missing.
    pub fn mail_account(&self) -> Option<MailAccount> {
        match (&self.mail_user, &self.mail_password) {
            (Some(user), Some(password)) => Some(MailAccount {
                user: user.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

/// Keys accepted from the settings file. Secrets only come from the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    mail_api_url: Option<String>,
    waitlist_to: Option<String>,
    sender_name: Option<String>,
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = non_empty(file_cfg.bind_addr) {
                    settings.server_bind = v;
                }
                if let Some(v) = non_empty(file_cfg.mail_api_url) {
                    settings.mail_api_url = v;
                }
                if let Some(v) = non_empty(file_cfg.waitlist_to) {
                    settings.waitlist_to = Some(v);
                }
                if let Some(v) = non_empty(file_cfg.sender_name) {
                    settings.sender_name = v;
                }
            }
            Err(error) => warn!(file = SETTINGS_FILE, %error, "ignoring unreadable settings file"),
        }
    }

    let lookup = |names: &[&str]| names.iter().find_map(|name| non_empty(env(name)));
    let lookup_secret = |names: &[&str]| names.iter().find_map(|name| non_blank(env(name)));

    if let Some(v) = lookup(&["APP__BIND_ADDR", "SERVER_BIND"]) {
        settings.server_bind = v;
    }
    if let Some(v) = lookup(&["APP__MAIL_API_URL", "MAIL_API_URL"]) {
        settings.mail_api_url = v;
    }
    if let Some(v) = lookup(&["APP__MAIL_USER", "MAIL_USER", "GMAIL_USER"]) {
        settings.mail_user = Some(v);
    }
    if let Some(v) = lookup_secret(&["APP__MAIL_PASSWORD", "MAIL_PASSWORD", "GMAIL_APP_PASSWORD"]) {
        settings.mail_password = Some(v);
    }
    if let Some(v) = lookup(&["APP__WAITLIST_TO", "WAITLIST_TO"]) {
        settings.waitlist_to = Some(v);
    }
    if let Some(v) = lookup(&["APP__SENDER_NAME", "SENDER_NAME"]) {
        settings.sender_name = v;
    }

    settings
}

/// Credentials are passed through verbatim; blank still counts as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
