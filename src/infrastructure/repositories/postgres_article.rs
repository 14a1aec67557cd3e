// src/infrastructure/repositories/postgres_article.rs
use super::error::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleMedia, ArticleReadRepository, CategoryId, MediaKind,
    ModerationStatus,
};
use crate::domain::author::{AuthorId, AuthorRecord, Visibility};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ARTICLE_COLUMNS: &str = "a.id, a.author_id, a.category_id, a.title, a.preview, a.body, \
     a.media_url, a.media_type, a.is_anonymous, a.status, a.rejection_reason, \
     a.likes_count, a.comments_count, a.favorites_count, a.rep_score, a.allow_comments, \
     a.created_at, a.updated_at, \
     p.id AS author_row_id, p.username AS author_username, p.first_name AS author_first_name, \
     p.last_name AS author_last_name, p.avatar_url AS author_avatar_url, \
     p.reputation AS author_reputation, p.is_premium AS author_is_premium, \
     p.show_username AS author_show_username, p.show_name AS author_show_name, \
     p.show_avatar AS author_show_avatar";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    author_id: Option<String>,
    category_id: Option<String>,
    title: String,
    preview: Option<String>,
    body: String,
    media_url: Option<String>,
    media_type: Option<String>,
    is_anonymous: bool,
    status: Option<String>,
    rejection_reason: Option<String>,
    likes_count: i64,
    comments_count: i64,
    favorites_count: i64,
    rep_score: i64,
    allow_comments: Option<bool>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_row_id: Option<String>,
    author_username: Option<String>,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    author_avatar_url: Option<String>,
    author_reputation: Option<i64>,
    author_is_premium: Option<bool>,
    author_show_username: Option<bool>,
    author_show_name: Option<bool>,
    author_show_avatar: Option<bool>,
}

// Row decoding never fails: loose or unknown stored values degrade the same
// way the view mapper's defaults do, and counters clamp to zero.
impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let author = row.author_row_id.map(|id| AuthorRecord {
            id: AuthorId::new(id),
            username: row.author_username.unwrap_or_default(),
            first_name: row.author_first_name.unwrap_or_default(),
            last_name: row.author_last_name,
            avatar_url: row.author_avatar_url,
            reputation: row.author_reputation.unwrap_or(0),
            is_premium: row.author_is_premium.unwrap_or(false),
            show_username: Visibility::from_flag(row.author_show_username),
            show_name: Visibility::from_flag(row.author_show_name),
            show_avatar: Visibility::from_flag(row.author_show_avatar),
        });

        let media = match (row.media_url, row.media_type.as_deref()) {
            (Some(url), Some(kind)) if !url.is_empty() => {
                MediaKind::parse(kind).map(|kind| ArticleMedia { url, kind })
            }
            _ => None,
        };

        Article {
            id: ArticleId::new(row.id),
            author_id: row.author_id.map(AuthorId::new),
            author,
            category_id: row.category_id.map(CategoryId::new),
            title: row.title,
            preview: row.preview,
            body: row.body,
            media,
            is_anonymous: row.is_anonymous,
            status: ModerationStatus::from_parts(row.status.as_deref(), row.rejection_reason),
            likes_count: row.likes_count.max(0),
            comments_count: row.comments_count.max(0),
            favorites_count: row.favorites_count.max(0),
            rep_score: row.rep_score.max(0),
            allow_comments: row.allow_comments,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list_approved(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             LEFT JOIN profiles p ON p.id = a.author_id \
             WHERE a.status = 'approved' \
             ORDER BY a.created_at DESC \
             LIMIT $1"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             LEFT JOIN profiles p ON p.id = a.author_id \
             WHERE a.author_id = $1 \
             ORDER BY a.created_at DESC"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(author_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }
}
