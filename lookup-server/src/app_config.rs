use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::infrastructure::providers::{abstractapi_com, ipapi_co, ipgeolocation_io};
use crate::retry::RetryPolicy;

/// Non-secret tunables. Every field has a default, so both sources are optional.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub boxapi_protocol: String,
    pub boxapi_host: String,
    pub ipapi_co_url: String,
    pub abstractapi_url: String,
    pub ipgeolocation_url: String,
    pub image_timeout_secs: u64,
    pub profile_retry: RetryPolicy,
    pub ip_provider_retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            boxapi_protocol: "https".to_string(),
            boxapi_host: "boxapi.ir".to_string(),
            ipapi_co_url: ipapi_co::DEFAULT_BASE_URL.to_string(),
            abstractapi_url: abstractapi_com::DEFAULT_BASE_URL.to_string(),
            ipgeolocation_url: ipgeolocation_io::DEFAULT_BASE_URL.to_string(),
            image_timeout_secs: 30,
            profile_retry: RetryPolicy::profile(),
            ip_provider_retry: RetryPolicy::ip_provider(),
        }
    }
}

impl AppConfig {
    /// `config.toml`, then `APP_*` environment variables (`__` nests, e.g.
    /// `APP_PROFILE_RETRY__MAX_ATTEMPTS=3`).
    pub fn load() -> Result<Self, ConfigError> {
        let conf = with_retry_defaults(Config::builder())?
            .add_source(File::with_name("config.toml").required(false))
            .add_source(environment())
            .build()?;

        conf.try_deserialize()
    }

    pub fn boxapi_config(&self) -> boxapi_rs::types::Config {
        boxapi_rs::types::Config {
            host: self.boxapi_host.clone(),
            protocol: self.boxapi_protocol.clone(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

/// Seeds each retry table field, so a source may override just one of them.
fn with_retry_defaults(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (table, policy) in [
        ("profile_retry", RetryPolicy::profile()),
        ("ip_provider_retry", RetryPolicy::ip_provider()),
    ] {
        builder = builder
            .set_default(
                format!("{table}.max_attempts"),
                i64::from(policy.max_attempts),
            )?
            .set_default(
                format!("{table}.backoff_base_seconds"),
                policy.backoff_base_seconds,
            )?;
    }
    Ok(builder)
}
