// src/presentation/http/controllers/playlists.rs
use crate::application::dto::PlaylistView;
use crate::domain::playlist::PlaylistService;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistParams {
    #[serde(default)]
    pub service: Option<String>,
}

pub async fn list_playlists(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PlaylistParams>,
) -> HttpResult<Json<Vec<PlaylistView>>> {
    let service = params
        .service
        .as_deref()
        .map(str::parse::<PlaylistService>)
        .transpose()
        .map_err(|err| HttpError::from_error(err.into()))?;

    Ok(Json(
        state.services.playlist_queries.list_playlists(service).await,
    ))
}
