use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::error::SearchError;
use crate::view::{self, ResultCard};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        let status = match err {
            SearchError::EmptyQuery => StatusCode::BAD_REQUEST,
            SearchError::CatalogNotReady | SearchError::CatalogLoadFailed { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            SearchError::TimeFormattingFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError(status, err.user_message())
    }
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/search ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct NoResults {
    pub headline: String,
    pub hint: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<ResultCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results: Option<NoResults>,
}

pub(super) async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();
    let raw = params.query.unwrap_or_default();

    // Rejections happen here, before the delay or the matcher run
    let query = state.session().begin(&raw)?;

    if !state.search_delay.is_zero() {
        tokio::time::sleep(state.search_delay).await;
    }

    let results = state.session().complete(&query)?;
    let cards = view::cards(&results, Utc::now());
    let no_results = cards.is_empty().then(|| {
        let (headline, hint) = view::no_results_message(query.as_str());
        NoResults { headline, hint }
    });

    info!(
        query = %query,
        hits = cards.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/search"
    );

    Ok(Json(SearchResponse {
        query: query.to_string(),
        count: cards.len(),
        results: cards,
        no_results,
    }))
}

// ─── GET /api/status ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub destinations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session();
    Json(StatusResponse {
        ready: session.is_ready(),
        destinations: session.catalog().map_or(0, |c| c.len()),
        error: session.load_error().map(SearchError::user_message),
    })
}
