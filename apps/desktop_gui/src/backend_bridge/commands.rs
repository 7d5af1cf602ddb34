//! Backend commands queued from UI to backend worker.

use shared::domain::EmailAddress;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    SubmitEmail { email: EmailAddress },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitEmail { .. } => "submit_email",
        }
    }
}
