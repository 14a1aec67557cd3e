// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleView;
use crate::presentation::http::extractors::{RequireViewer, ViewerIdentity};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// 0 means "use the server default".
    #[serde(default)]
    pub limit: u32,
}

pub async fn list_approved(
    Extension(state): Extension<HttpState>,
    ViewerIdentity(viewer): ViewerIdentity,
    Query(params): Query<FeedParams>,
) -> Json<Vec<ArticleView>> {
    Json(
        state
            .services
            .article_queries
            .list_approved(&viewer, params.limit)
            .await,
    )
}

pub async fn list_mine(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
) -> Json<Vec<ArticleView>> {
    Json(
        state
            .services
            .article_queries
            .list_for_author(&viewer)
            .await,
    )
}
