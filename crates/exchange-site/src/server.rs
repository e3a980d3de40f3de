//! HTTP server that resolves request paths through the route table

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use exchange_router::path::strip_base;
use exchange_router::Resolution;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::SiteConfig;
use crate::pages;
use crate::routes;
use crate::view::View;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    router: Arc<exchange_router::Router<View>>,
    base_path: Arc<str>,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: Arc::new(routes::matcher(config.routing.case_insensitive)),
            base_path: Arc::from(config.base_path()),
        }
    }

    /// Resolves a full request path, honouring the base path
    pub fn resolve(&self, request_path: &str) -> Resolution<View> {
        match strip_base(&self.base_path, request_path) {
            Some(path) => self.router.resolve(&path),
            None => Resolution::NotFound {
                path: exchange_router::normalize_path(request_path).into_owned(),
            },
        }
    }
}

/// Builds the axum application
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/__routes", get(manifest_handler))
        .route("/", get(page_handler))
        .route("/*path", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds and serves until Ctrl-C
pub async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let app = app(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, base = config.base_path(), routes = routes::registry().len(), "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
    }
}

async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let resolution = state.resolve(uri.path());
    let status = if resolution.is_matched() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    let markup = pages::render(&resolution, &state.base_path);
    (status, Html(markup.into_string())).into_response()
}

async fn manifest_handler() -> Json<Vec<serde_json::Value>> {
    Json(pages::manifest(routes::registry()))
}
