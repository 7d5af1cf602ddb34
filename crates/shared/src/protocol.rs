use serde::{Deserialize, Serialize};

pub const WAITLIST_ROUTE: &str = "/api/waitlist";
pub const HEALTHZ_ROUTE: &str = "/healthz";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WaitlistResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
