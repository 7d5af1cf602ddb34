use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email is required")]
    Empty,
    #[error("email is not a valid address")]
    Invalid,
}

impl EmailError {
    /// Text shown next to the form field.
    pub fn form_message(self) -> &'static str {
        match self {
            Self::Empty => "Please enter your email.",
            Self::Invalid => "Please enter a valid email address.",
        }
    }
}
