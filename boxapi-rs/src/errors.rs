use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoxApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("BoxAPI returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed BoxAPI response: {0}")]
    Decode(#[from] serde_json::Error),
}
