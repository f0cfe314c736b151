use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Contact name cannot be empty.")]
    InvalidName,

    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate(String),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Old phone not found.")]
    PhoneNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RolodexError {
    /// Domain errors are reported to the user and the session carries on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RolodexError::Io(_) | RolodexError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
