use std::sync::Arc;

use axum::Router;
use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use hub_core::application::services::ApplicationServices;
use hub_core::domain::article::Article;
use hub_core::domain::playlist::Playlist;
use hub_core::presentation::http::routes::build_router;
use hub_core::presentation::http::state::HttpState;

use super::mocks::{InMemoryArticleRepo, InMemoryPlaylistRepo, InMemorySearchHistory};

/// A full router over in-memory stores, ready for `oneshot` requests.
pub fn make_test_router(articles: Vec<Article>, playlists: Vec<Playlist>) -> Router {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryArticleRepo::new(articles)),
        Arc::new(InMemoryPlaylistRepo::new(playlists)),
        Arc::new(InMemorySearchHistory::new()),
        100,
    ));
    build_router(HttpState { services }, &["*".to_string()])
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert an error response: status, JSON body, canonical `error` field and a
/// non-empty `message`.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some(expected_error)
    );
    assert!(
        json.get("message")
            .and_then(Value::as_str)
            .is_some_and(|msg| !msg.is_empty()),
        "expected a non-empty message field"
    );
}
