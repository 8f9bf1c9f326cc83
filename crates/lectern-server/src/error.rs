use axum::{
    Json,
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lectern_tasks::TaskError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, ApiError>;

const METHOD_NOT_ALLOWED: &str = "方法不允许";

/// Endpoint failures with their HTTP status codes
#[derive(Debug)]
pub enum ApiError {
    /// Task-level failure
    Task(TaskError),
    /// Body could not be read or decoded
    Rejected { status: StatusCode, message: String },
    /// Anything other than `POST` or `OPTIONS`
    MethodNotAllowed,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Task(TaskError::MissingInput(_) | TaskError::ImageUnavailable) => StatusCode::BAD_REQUEST,
            Self::Task(TaskError::Upstream { .. }) => StatusCode::BAD_GATEWAY,
            Self::Task(TaskError::Transport { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::Task(e) => e.client_message(),
            Self::Rejected { message, .. } => message.clone(),
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED.to_owned(),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(error: TaskError) -> Self {
        Self::Task(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected JSON body");
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected multipart body");
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error body shared by every endpoint
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Task(TaskError::MissingInput(missing)) = &self {
            tracing::debug!(field = missing.field(), "request is missing input");
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}
