use crate::application::dto::AuthorView;
use crate::domain::article::{Article, ModerationStatus};
use crate::domain::author;
use crate::domain::viewer::Viewer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The article shape handed to presentation. Scalar fields are fully
/// defaulted, so rendering never has to deal with absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleView {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
    pub category_id: String,
    pub title: String,
    pub preview: String,
    pub body: String,
    pub media_url: String,
    pub media_type: String,
    pub is_anonymous: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub favorites_count: i64,
    pub rep_score: i64,
    pub allow_comments: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleView {
    /// Map an article to what the given viewer is allowed to see.
    ///
    /// Deterministic and side effect free. Malformed or absent optional
    /// fields degrade to defaults rather than failing: empty strings for
    /// category and preview, comments allowed unless explicitly off, and
    /// `pending` when the store carries no status.
    pub fn project(article: Article, viewer: &Viewer) -> Self {
        let projection = author::resolve(article.author.as_ref(), viewer, article.is_anonymous);
        let status = article.status.unwrap_or(ModerationStatus::Pending);
        let rejection_reason = status.rejection_reason().map(str::to_string);
        let (media_url, media_type) = match article.media {
            Some(media) => (media.url, media.kind.as_str().to_string()),
            None => (String::new(), "none".to_string()),
        };

        Self {
            id: article.id.into(),
            author: projection.map(AuthorView::from),
            category_id: article.category_id.map(String::from).unwrap_or_default(),
            title: article.title,
            preview: article.preview.unwrap_or_default(),
            body: article.body,
            media_url,
            media_type,
            is_anonymous: article.is_anonymous,
            status: status.as_str().to_string(),
            rejection_reason,
            likes_count: article.likes_count,
            comments_count: article.comments_count,
            favorites_count: article.favorites_count,
            rep_score: article.rep_score,
            allow_comments: article.allow_comments.unwrap_or(true),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
