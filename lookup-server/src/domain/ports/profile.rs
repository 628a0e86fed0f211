use crate::domain::errors::AppError;
use serde_json::Value;
use std::future::Future;

pub trait ProfileRepository: Send + Sync + 'static {
    /// Raw web-profile payload for `username`, one upstream attempt.
    fn web_profile(&self, username: &str) -> impl Future<Output = Result<Value, AppError>> + Send;
}
