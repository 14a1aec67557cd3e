// src/presentation/http/controllers/searches.rs
use crate::presentation::http::extractors::RequireViewer;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecordSearchRequest {
    pub query: String,
}

pub async fn recent(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
) -> Json<Vec<String>> {
    Json(state.services.recent_searches.recent(&viewer))
}

pub async fn record(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Json(request): Json<RecordSearchRequest>,
) -> Json<Vec<String>> {
    Json(
        state
            .services
            .recent_searches
            .record(&viewer, &request.query),
    )
}

pub async fn clear(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
) -> StatusCode {
    state.services.recent_searches.clear(&viewer);
    StatusCode::NO_CONTENT
}
