use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::*,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::app_state::AppState;
use crate::domain::{
    errors::AppError,
    models::{IpInfoResponse, ProfileRecord},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(config: HttpServerConfig<'_>, state: AppState) -> anyhow::Result<Self> {
        let router = router(state);

        let addr = SocketAddr::from((
            [0, 0, 0, 0, 0, 0, 0, 0],
            config.port.parse::<u16>().unwrap_or(3000),
        ));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("listener has no local address")?;
        tracing::debug!("listening on {}", addr);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

pub fn router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_route))
        .route("/instagram_username/{username}", get(instagram_username_route))
        .route("/ip_information/{ip}", get(ip_information_route))
        .with_state(state)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
}

async fn root_route() -> Json<Value> {
    Json(json!({ "message": "Hello, I'm Working!" }))
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn instagram_username_route(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileRecord>, AppError> {
    let profile = state.profile_service.public_info(&username).await?;
    Ok(Json(profile))
}

async fn ip_information_route(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Json<IpInfoResponse> {
    Json(state.ip_info_service.get_ip_info(&ip).await)
}
