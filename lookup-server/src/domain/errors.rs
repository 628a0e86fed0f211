use axum::{http::StatusCode, response::IntoResponse};
use boxapi_rs::errors::BoxApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error fetching data for username {username}: {status}")]
    Profile { username: String, status: u16 },
    #[error("Network error fetching data for username {username}: {message}")]
    ProfileNetwork { username: String, message: String },
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid data {0}")]
    InvalidData(String),
}

impl AppError {
    /// Rewrites a single profile attempt's failure so it names the username.
    pub fn for_username(self, username: &str) -> Self {
        match self {
            AppError::UpstreamStatus { status, .. } => AppError::Profile {
                username: username.to_string(),
                status: status.as_u16(),
            },
            AppError::RequestFailed(message) => AppError::ProfileNetwork {
                username: username.to_string(),
                message,
            },
            other => other,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => AppError::UpstreamStatus {
                status,
                body: e.to_string(),
            },
            None => AppError::RequestFailed(e.to_string()),
        }
    }
}

impl From<BoxApiError> for AppError {
    fn from(e: BoxApiError) -> Self {
        match e {
            BoxApiError::ApiError { status, body } => AppError::UpstreamStatus { status, body },
            BoxApiError::HttpError(e) => e.into(),
            BoxApiError::Decode(e) => AppError::InvalidData(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::UpstreamStatus { status, body } => (
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_REQUEST),
                body,
            )
                .into_response(),
            _ => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        }
    }
}
