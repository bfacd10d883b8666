use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use shared::{
    domain::ListItem,
    error::{ApiError, ErrorCode},
    protocol::{UndoListResponse, UNDO_LIST_PATH},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_seed, load_settings};

#[derive(Clone)]
struct AppState {
    items: Arc<Vec<ListItem>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let items = load_seed(settings.seed_path.as_deref())?;
    info!(len = items.len(), "seed list ready");

    let app = build_router(AppState {
        items: Arc::new(items),
    });

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "mock server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(UNDO_LIST_PATH, get(undo_list))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn undo_list(State(state): State<AppState>) -> Json<UndoListResponse> {
    debug!(len = state.items.len(), "serving undo list");
    Json(UndoListResponse::new(state.items.as_ref().clone()))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
