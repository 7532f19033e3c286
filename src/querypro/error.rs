use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Invalid enquiry id: {0}")]
    InvalidId(String),

    #[error("An enquiry with email {0} already exists")]
    DuplicateKey(String),

    #[error("Enquiry not found: {0}")]
    NotFound(Uuid),

    #[error("Request failed: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl QueryError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        QueryError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        QueryError::Transport {
            status,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
