use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";

const BOXAPI_USERNAME: &str = "BOXAPI_USERNAME";

const BOXAPI_PASSWORD: &str = "BOXAPI_PASSWORD";

const ABSTRACTAPI_TOKEN: &str = "ABSTRACTAPI_TOKEN";

const IPGEOLOCATION_TOKEN: &str = "IPGEOLOCATION_TOKEN";

/// Secrets and process settings, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub boxapi_username: String,
    pub boxapi_password: String,
    pub abstractapi_token: Option<String>,
    pub ipgeolocation_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let server_port = load_env(SERVER_PORT_KEY).unwrap_or("3000".to_string());

        let boxapi_username =
            load_env(BOXAPI_USERNAME).context("Failed to get BoxAPI username")?;

        let boxapi_password =
            load_env(BOXAPI_PASSWORD).context("Failed to get BoxAPI password")?;

        let abstractapi_token = load_env(ABSTRACTAPI_TOKEN).ok();

        let ipgeolocation_token = load_env(IPGEOLOCATION_TOKEN).ok();

        Ok(Config {
            server_port,
            boxapi_username,
            boxapi_password,
            abstractapi_token,
            ipgeolocation_token,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_port", &self.server_port)
            .field("boxapi_username", &self.boxapi_username)
            .field("abstractapi_token", &self.abstractapi_token.is_some())
            .field("ipgeolocation_token", &self.ipgeolocation_token.is_some())
            .finish_non_exhaustive()
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("failed to load environment variable {}", key))
}
