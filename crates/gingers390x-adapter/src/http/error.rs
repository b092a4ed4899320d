/*
[INPUT]:  Error sources (HTTP transport, console API, task polling)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for the entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::Task;

/// Main error type for the console adapter
#[derive(Error, Debug)]
pub enum GingerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The console rejected the request
    #[error("console error (status {status}): {reason}")]
    Api { status: u16, reason: String },

    /// Login was rejected or the session expired
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from the console
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A task stayed in progress past the poll attempt bound
    #[error("timed out waiting for task {task_id}: still in progress after {max_attempts} polls")]
    TaskTimeout { task_id: String, max_attempts: u32 },

    /// A task reported a status that is neither in progress nor the
    /// terminal status the caller expected
    #[error(
        "task {id} reached unexpected status \"{status}\": {message}",
        id = .task.id,
        status = .task.status,
        message = .task.message
    )]
    UnexpectedTaskStatus { task: Task },
}

impl GingerError {
    /// Create an API error from status code and reason message
    pub fn api_error(status: StatusCode, reason: impl Into<String>) -> Self {
        GingerError::Api {
            status: status.as_u16(),
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the console, if this is an API error
    pub fn api_status(&self) -> Option<u16> {
        match self {
            GingerError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GingerError::Authentication { .. })
    }

    /// Check if error came from task polling rather than transport
    pub fn is_task_error(&self) -> bool {
        matches!(
            self,
            GingerError::TaskTimeout { .. } | GingerError::UnexpectedTaskStatus { .. }
        )
    }
}

/// Result type alias for console adapter operations
pub type Result<T> = std::result::Result<T, GingerError>;
