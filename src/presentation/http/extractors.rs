// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::{
        author::AuthorId,
        viewer::{Viewer, ViewerRole},
    },
};
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use super::error::HttpError;

/// Header names the chat-host gateway injects for the authenticated user.
/// Absent or unreadable headers degrade to a guest viewer; role values this
/// build does not know count as regular.
pub const VIEWER_ID_HEADER: &str = "x-viewer-id";
pub const VIEWER_ROLE_HEADER: &str = "x-viewer-role";

#[derive(Debug, Clone)]
pub struct ViewerIdentity(pub Viewer);

#[derive(Debug, Clone)]
pub struct RequireViewer(pub Viewer);

fn viewer_from_parts(parts: &Parts) -> Viewer {
    let id = header_value(parts, VIEWER_ID_HEADER).unwrap_or_default();
    let role = header_value(parts, VIEWER_ROLE_HEADER)
        .and_then(|value| value.parse::<ViewerRole>().ok())
        .unwrap_or_default();
    Viewer::new(AuthorId::new(id), role)
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for ViewerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(viewer_from_parts(parts)))
    }
}

impl<S> FromRequestParts<S> for RequireViewer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let viewer = viewer_from_parts(parts);
        if !viewer.has_identity() {
            return Err(HttpError::from_error(ApplicationError::unauthorized(
                format!("missing {VIEWER_ID_HEADER} header"),
            )));
        }
        Ok(Self(viewer))
    }
}
