use anyhow::Context;
use lookup_server::{
    adapters::{
        app_state::AppState,
        http::{HttpServer, HttpServerConfig},
    },
    app_config::AppConfig,
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    let app_config = AppConfig::load().context("failed to load config.toml / APP_* settings")?;
    tracing::info!(?config, "configuration loaded");

    let state = AppState::new(&config, &app_config);
    let http_server = HttpServer::new(
        HttpServerConfig {
            port: &config.server_port,
        },
        state,
    )
    .await?;
    http_server.run().await
}
