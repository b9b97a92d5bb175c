//! HTTP endpoint: `/` returns the collision counts for any method, any other path is 404.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use collide_core::aggregate;
use collide_core::config::CollideConfig;
use collide_core::fetch::FetchLines;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const NOT_FOUND_BODY: &str = "This url is not valid :(";

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CollideConfig>,
    fetcher: Arc<dyn FetchLines>,
}

impl AppState {
    pub fn new(cfg: CollideConfig, fetcher: Arc<dyn FetchLines>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            fetcher,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle_collisions))
        .fallback(handle_not_found)
        .with_state(state)
}

/// Serves on an already-bound listener.
pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .await
        .context("HTTP server")?;
    Ok(())
}

pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!("listening on {}", addr);
    serve_on(listener, state).await
}

async fn handle_collisions(State(state): State<AppState>) -> Response {
    tracing::info!("computing collisions");
    match aggregate::run_configured(Arc::clone(&state.fetcher), &state.cfg).await {
        Ok(json) => {
            tracing::info!("collisions computed");
            ([(header::CONTENT_TYPE, "application/json")], json).into_response()
        }
        Err(e) => {
            tracing::error!("collisions failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn handle_not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::warn!(path = %uri.path(), "404");
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
