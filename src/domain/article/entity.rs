// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleMedia, CategoryId, ModerationStatus};
use crate::domain::author::{AuthorId, AuthorRecord};
use chrono::{DateTime, Utc};

/// An article as read from the store, author row joined in when one exists.
///
/// Upstream data may be partially populated, so the loose fields stay
/// optional here; the view mapper substitutes the documented defaults.
/// Counters are maintained by external increment operations and arrive
/// already clamped to zero or above.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: Option<AuthorId>,
    pub author: Option<AuthorRecord>,
    pub category_id: Option<CategoryId>,
    pub title: String,
    pub preview: Option<String>,
    pub body: String,
    pub media: Option<ArticleMedia>,
    pub is_anonymous: bool,
    pub status: Option<ModerationStatus>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub favorites_count: i64,
    pub rep_score: i64,
    pub allow_comments: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_approved(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(ModerationStatus::is_approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_article(status: Option<ModerationStatus>) -> Article {
        Article {
            id: ArticleId::new("art-1"),
            author_id: None,
            author: None,
            category_id: None,
            title: "title".into(),
            preview: None,
            body: "body".into(),
            media: None,
            is_anonymous: false,
            status,
            likes_count: 0,
            comments_count: 0,
            favorites_count: 0,
            rep_score: 0,
            allow_comments: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn only_approved_status_counts_as_approved() {
        assert!(bare_article(Some(ModerationStatus::Approved)).is_approved());
        assert!(!bare_article(Some(ModerationStatus::Pending)).is_approved());
        assert!(!bare_article(None).is_approved());
    }
}
