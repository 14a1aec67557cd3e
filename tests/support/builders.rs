// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use hub_core::domain::article::{Article, ArticleId, CategoryId, ModerationStatus};
use hub_core::domain::author::{AuthorId, AuthorRecord, Visibility};
use hub_core::domain::playlist::{Playlist, PlaylistCategory, PlaylistId, PlaylistService};

static BASE_TIME: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

pub fn base_time() -> DateTime<Utc> {
    *BASE_TIME
}

pub struct ArticleBuilder {
    id: String,
    author: Option<AuthorRecord>,
    author_id: Option<String>,
    category_id: Option<String>,
    title: String,
    status: Option<ModerationStatus>,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: None,
            author_id: None,
            category_id: None,
            title: "Test Article".into(),
            status: Some(ModerationStatus::Approved),
            is_anonymous: false,
            created_at: base_time(),
        }
    }

    pub fn author(mut self, author: AuthorRecord) -> Self {
        self.author_id = Some(author.id.as_str().to_string());
        self.author = Some(author);
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: ModerationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn no_status(mut self) -> Self {
        self.status = None;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    /// Shift `created_at` forward so builders can express relative recency.
    pub fn created_seconds_after_base(mut self, seconds: i64) -> Self {
        self.created_at = base_time() + Duration::seconds(seconds);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            author_id: self.author_id.map(AuthorId::new),
            author: self.author,
            category_id: self.category_id.map(CategoryId::new),
            title: self.title,
            preview: None,
            body: "Test body".into(),
            media: None,
            is_anonymous: self.is_anonymous,
            status: self.status,
            likes_count: 0,
            comments_count: 0,
            favorites_count: 0,
            rep_score: 0,
            allow_comments: None,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub struct AuthorBuilder {
    id: String,
    username: String,
    first_name: String,
    last_name: Option<String>,
    avatar_url: Option<String>,
    show_username: Option<bool>,
    show_name: Option<bool>,
    show_avatar: Option<bool>,
}

impl AuthorBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: "testuser".into(),
            first_name: "Test".into(),
            last_name: Some("User".into()),
            avatar_url: Some("https://cdn.example/avatar.png".into()),
            show_username: None,
            show_name: None,
            show_avatar: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn show_username(mut self, flag: bool) -> Self {
        self.show_username = Some(flag);
        self
    }

    pub fn show_name(mut self, flag: bool) -> Self {
        self.show_name = Some(flag);
        self
    }

    pub fn show_avatar(mut self, flag: bool) -> Self {
        self.show_avatar = Some(flag);
        self
    }

    pub fn build(self) -> AuthorRecord {
        AuthorRecord {
            id: AuthorId::new(self.id),
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar_url: self.avatar_url,
            reputation: 10,
            is_premium: false,
            show_username: Visibility::from_flag(self.show_username),
            show_name: Visibility::from_flag(self.show_name),
            show_avatar: Visibility::from_flag(self.show_avatar),
        }
    }
}

pub struct PlaylistBuilder {
    id: String,
    service: PlaylistService,
    category: PlaylistCategory,
    created_at: Option<DateTime<Utc>>,
}

impl PlaylistBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service: PlaylistService::Spotify,
            category: PlaylistCategory::Motivation,
            created_at: Some(base_time()),
        }
    }

    pub fn service(mut self, service: PlaylistService) -> Self {
        self.service = service;
        self
    }

    pub fn category(mut self, category: PlaylistCategory) -> Self {
        self.category = category;
        self
    }

    pub fn created_seconds_after_base(mut self, seconds: i64) -> Self {
        self.created_at = Some(base_time() + Duration::seconds(seconds));
        self
    }

    pub fn build(self) -> Playlist {
        Playlist {
            id: PlaylistId::new(self.id),
            service: self.service,
            category: self.category,
            title: "Test Playlist".into(),
            url: "https://music.example/playlist".into(),
            cover_urls: vec!["https://cdn.example/cover.png".into()],
            created_at: self.created_at,
        }
    }
}
