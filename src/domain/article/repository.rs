// src/domain/article/repository.rs
use crate::domain::article::entity::Article;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read access to the remote article store. Implementations join the author
/// row in and return articles ordered by `created_at` descending. A single
/// fetch attempt per call; retries, if any, belong to the client below this
/// trait.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Approved articles only, newest first, at most `limit` rows.
    async fn list_approved(&self, limit: u32) -> DomainResult<Vec<Article>>;

    /// Every article owned by the author, all moderation states, newest
    /// first.
    async fn list_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>>;
}
