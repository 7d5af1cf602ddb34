use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::EmailAddress,
    protocol::{WaitlistRequest, WaitlistResponse, WAITLIST_ROUTE},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub mod carousel;
pub mod page;
pub mod waitlist;

pub use carousel::{Carousel, CarouselError, CarouselInput, NavKey};
pub use page::{PageEffect, PageEvent, PrelaunchPage};
pub use waitlist::{SubmissionOutcome, SubmitRejection, WaitlistForm};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(
        "relay rejected submission with status {status}{}",
        message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid relay url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SubmitError {
    /// The relay's own explanation, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<Result<(), SubmitError>> for SubmissionOutcome {
    fn from(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Accepted,
            Err(err) => SubmissionOutcome::Failed {
                message: err.server_message().map(str::to_string),
            },
        }
    }
}

#[async_trait]
pub trait WaitlistTransport: Send + Sync {
    async fn submit(&self, email: &EmailAddress) -> Result<(), SubmitError>;
}

/// HTTP client for the relay's waitlist endpoint.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    http: Client,
    endpoint: Url,
}

impl WaitlistClient {
    /// `relay_url` may carry a path prefix; the route is appended under it.
    pub fn new(relay_url: &str) -> Result<Self, SubmitError> {
        let mut base = Url::parse(relay_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(WAITLIST_ROUTE.trim_start_matches('/'))?;
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
impl WaitlistTransport for WaitlistClient {
    async fn submit(&self, email: &EmailAddress) -> Result<(), SubmitError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&WaitlistRequest {
                email: email.as_str().to_string(),
            })
            .send()
            .await?;
        let status = res.status();
        let body = res.json::<WaitlistResponse>().await.ok();

        match body {
            Some(WaitlistResponse { ok: true, .. }) if status.is_success() => Ok(()),
            body => Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: body.and_then(|b| b.error),
            }),
        }
    }
}

/// Runs one submission from the form through `transport`. Input the form
/// rejects never reaches the transport.
pub async fn submit_waitlist(
    form: &mut WaitlistForm,
    transport: &dyn WaitlistTransport,
) -> Result<SubmissionOutcome, SubmitRejection> {
    let email = form.begin_submit()?;
    let result = transport.submit(&email).await;
    match &result {
        Ok(()) => info!(domain = email.domain(), "joined waitlist"),
        Err(err) => warn!(%err, "waitlist submission failed"),
    }
    let outcome = SubmissionOutcome::from(result);
    form.complete(outcome.clone());
    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
