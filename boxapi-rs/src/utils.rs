use crate::errors::BoxApiError;
use crate::types::{Config, Credentials};
use reqwest::Client;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(config, credentials, payload)))]
pub async fn send_request(
    config: &Config,
    credentials: &Credentials,
    endpoint: &str,
    payload: Value,
) -> Result<Value, BoxApiError> {
    let client = Client::new();
    let url = format!("{}://{}{}", config.protocol, config.host, endpoint);
    #[cfg(feature = "tracing")]
    debug!(%url, body = ?payload, "Sending request to BoxAPI");

    let res = client
        .post(&url)
        .basic_auth(&credentials.username, Some(&credentials.password))
        .header("Accept", "application/json")
        .json(&payload)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        #[cfg(feature = "tracing")]
        error!(status = ?status, body = %body, "BoxAPI returned error");
        return Err(BoxApiError::ApiError { status, body });
    }

    let body = res.text().await?;
    #[cfg(feature = "tracing")]
    info!(status = ?status, "BoxAPI request successful");
    Ok(serde_json::from_str(&body)?)
}
