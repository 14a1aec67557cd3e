// tests/support/mocks/article_repos.rs
use async_trait::async_trait;

use hub_core::domain::article::{Article, ArticleReadRepository};
use hub_core::domain::author::AuthorId;
use hub_core::domain::errors::{DomainError, DomainResult};

/// Read repository over a fixed slice of articles, honoring the trait's
/// ordering contract (newest first).
pub struct InMemoryArticleRepo {
    articles: Vec<Article>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        articles
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list_approved(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let approved = self
            .articles
            .iter()
            .filter(|article| article.is_approved())
            .cloned()
            .collect();
        let mut approved = Self::newest_first(approved);
        approved.truncate(limit as usize);
        Ok(approved)
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let owned = self
            .articles
            .iter()
            .filter(|article| article.author_id.as_ref() == Some(author_id))
            .cloned()
            .collect();
        Ok(Self::newest_first(owned))
    }
}

/// Simulates an unreachable backing store.
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list_approved(&self, _limit: u32) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("article store unavailable".into()))
    }

    async fn list_by_author(&self, _author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("article store unavailable".into()))
    }
}
