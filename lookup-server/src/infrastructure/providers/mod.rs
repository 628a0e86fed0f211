pub mod abstractapi_com;
pub mod ipapi_co;
pub mod ipgeolocation_io;

use futures::future::BoxFuture;
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::domain::{
    errors::AppError,
    models::{IpInfoRecord, NOT_AVAILABLE},
    ports::ip_info::IpInfoProvider,
};
use crate::retry::{with_retry, RetryPolicy};

/// Retries every lookup of the wrapped provider according to `policy`.
pub struct Retrying<P> {
    inner: P,
    policy: RetryPolicy,
}

impl<P: IpInfoProvider> Retrying<P> {
    pub fn new(inner: P, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<P: IpInfoProvider> IpInfoProvider for Retrying<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn lookup<'a>(&'a self, ip: &'a str) -> BoxFuture<'a, Result<IpInfoRecord, AppError>> {
        Box::pin(with_retry(&self.policy, self.inner.name(), move || {
            self.inner.lookup(ip)
        }))
    }
}

/// Sends `request` and parses a 2xx body as JSON.
async fn get_json(request: RequestBuilder) -> Result<Value, AppError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AppError::UpstreamStatus { status, body });
    }

    serde_json::from_str(&body).map_err(|e| AppError::InvalidData(e.to_string()))
}

fn text_or_na(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => NOT_AVAILABLE.to_string(),
        Some(other) => other.to_string(),
    }
}

fn value_or_na(value: Option<&Value>) -> Value {
    match value {
        Some(Value::Null) | None => Value::String(NOT_AVAILABLE.to_string()),
        Some(other) => other.clone(),
    }
}
