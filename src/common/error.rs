use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;

/// Logs a store/runtime failure with its call site and wraps its text verbatim.
#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    let e = e.into();
    error!("A store error has occurred at {caller}: {e}");
    Err(AppError::Store(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    DatabaseNotConfigured,
    DecodingRequestFailed(String),
    MethodNotAllowed,

    MessagesTextRequired,

    /// Raw text of the failure reported by the store.
    Store(String),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseNotConfigured => "database_not_configured",
            AppError::DecodingRequestFailed(_) => "decoding_request_failed",
            AppError::MethodNotAllowed => "method_not_allowed",

            AppError::MessagesTextRequired => "messages.text_required",

            AppError::Store(_) => "store",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseNotConfigured => "Database connection not configured",
            AppError::MethodNotAllowed => "Method not allowed",

            AppError::MessagesTextRequired => "Message text is required",

            AppError::DecodingRequestFailed(message) | AppError::Store(message) => message,
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::MessagesTextRequired => StatusCode::BAD_REQUEST,

            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            AppError::DatabaseNotConfigured
            | AppError::DecodingRequestFailed(_)
            | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response_parts(&self) -> (StatusCode, ErrorResponse) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            error: self.message().to_owned(),
        };
        (status, response)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
