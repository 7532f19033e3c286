use crate::error::{QueryError, Result};
use crate::model::Enquiry;
use std::str::FromStr;
use uuid::Uuid;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command.
    pub affected_enquiries: Vec<Enquiry>,
    pub listed_enquiries: Vec<Enquiry>,
    /// How many of the affected records actually changed.
    pub modified_count: u64,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_enquiries(mut self, enquiries: Vec<Enquiry>) -> Self {
        self.listed_enquiries = enquiries;
        self
    }
}

/// Parse an enquiry id as it appears in a URL path.
pub fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::from_str(raw.trim()).map_err(|_| QueryError::InvalidId(raw.to_string()))
}
