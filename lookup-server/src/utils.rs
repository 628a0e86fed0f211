use std::time::Duration;

use reqwest::Client;

use crate::domain::errors::AppError;

pub const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads `url` and returns the body as standard padded base64.
pub async fn fetch_image_base64(url: &str, timeout: Duration) -> Result<String, AppError> {
    let response = Client::new().get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        tracing::error!(%url, status = ?status, body = %body, "image fetch failed");
        return Err(AppError::UpstreamStatus { status, body });
    }

    let bytes = response.bytes().await?;
    Ok(base64::encode(&bytes))
}
