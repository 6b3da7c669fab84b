//! HTTP front end: serves the search widget and a JSON search API.

mod handlers;
mod state;
mod static_files;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::session::SearchSession;

pub use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .route("/api/search", get(handlers::search))
        .route("/api/status", get(handlers::status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind, start the one-shot catalog load in the background, then serve.
///
/// Requests that arrive before the load finishes are answered with
/// "not ready".
pub async fn start(config: AppConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(SearchSession::new(), config.search_delay));
    let app = build_router(state.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    eprintln!("  TravelBloom listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    let source = config.catalog.clone();
    let loader_state = state.clone();
    tokio::spawn(async move {
        let loaded = tokio::task::spawn_blocking(move || source.load()).await;
        let mut session = loader_state.session();
        match loaded {
            Ok(Ok(catalog)) => session.set_catalog(catalog),
            Ok(Err(e)) => session.record_load_failure(e),
            Err(join_err) => session.record_load_failure(crate::SearchError::load_failed(
                config.catalog.to_string(),
                join_err.to_string(),
            )),
        }
    });

    axum::serve(listener, app).await
}
