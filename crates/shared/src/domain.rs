use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EmailError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub alt: String,
}

impl Slide {
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
        }
    }
}

/// The fixed carousel contents shipped with the page.
pub fn prelaunch_slides() -> Vec<Slide> {
    (1..=4)
        .map(|n| {
            Slide::new(
                format!("assets/images/image{n}.jpg"),
                format!("Photobooth setup preview {n}"),
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub headline: Vec<String>,
    pub copy: Vec<String>,
    pub contact_email: String,
    pub social_url: String,
}

impl Brand {
    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "PICTURA".into(),
            tagline: "momento capta".into(),
            headline: vec!["You came".into(), "to the".into(), "right place.".into()],
            copy: vec![
                "Stay tuned for a brand-new browsing experience.".into(),
                "Our new website is launching soon.".into(),
            ],
            contact_email: "hello@pictura.com".into(),
            social_url: "https://instagram.com/".into(),
        }
    }
}

/// A trimmed, lowercased address that matched the waitlist email pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let cleaned = raw.trim().to_lowercase();
        if cleaned.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_PATTERN.is_match(&cleaned) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, safe to put in logs.
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
