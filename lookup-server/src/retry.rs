use serde::Deserialize;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How many times an operation is attempted and how long to wait in between.
///
/// The wait before attempt `n + 1` is `backoff_base_seconds * 2^(n - 1)`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base_seconds: f64,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, backoff_base_seconds: f64) -> Self {
        Self {
            max_attempts,
            backoff_base_seconds,
        }
    }

    /// Instagram profile lookups.
    pub const fn profile() -> Self {
        Self::new(5, 1.0)
    }

    /// Each IP geolocation provider.
    pub const fn ip_provider() -> Self {
        Self::new(5, 0.2)
    }

    /// Always at least one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Sleep after failed `attempt` (numbered from 1).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.backoff_base_seconds * 2f64.powi(exponent);
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Runs `operation` until it succeeds or the policy's attempts run out.
///
/// The last failure is returned as-is.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(operation = name, attempt, "succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt >= max_attempts => {
                tracing::error!(
                    operation = name,
                    max_attempts,
                    error = %e,
                    "giving up after all attempts"
                );
                return Err(e);
            }
            Err(e) => {
                let wait = policy.backoff_for(attempt);
                tracing::warn!(
                    operation = name,
                    attempt,
                    max_attempts,
                    error = %e,
                    wait_secs = wait.as_secs_f64(),
                    "attempt failed, retrying"
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
