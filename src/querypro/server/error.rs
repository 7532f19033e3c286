use crate::error::QueryError;
use crate::wire::{ErrorResponse, STATUS_FAILED};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

const GENERIC_FAILURE: &str = "something went wrong.";

/// Everything a handler can fail with, mapped to a status code and an
/// `{status: 0, message}` body.
#[derive(Debug)]
pub enum ApiError {
    Query(QueryError),
    /// The body was not JSON, or not the JSON we expected.
    Rejected(StatusCode, String),
    LockPoisoned,
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::Query(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(err) => match err {
                QueryError::Validation { .. } | QueryError::InvalidId(_) => {
                    StatusCode::BAD_REQUEST
                }
                QueryError::DuplicateKey(_) => StatusCode::CONFLICT,
                QueryError::NotFound(_) => StatusCode::NOT_FOUND,
                QueryError::Transport { .. }
                | QueryError::Io(_)
                | QueryError::Serialization(_)
                | QueryError::Store(_)
                | QueryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Rejected(status, _) => *status,
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Rejected(_, message) => message.clone(),
            _ if self.status().is_server_error() => GENERIC_FAILURE.to_string(),
            ApiError::Query(err) => err.to_string(),
            ApiError::LockPoisoned => GENERIC_FAILURE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = ?self, "request rejected");
        }
        let body = ErrorResponse {
            status: STATUS_FAILED,
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
