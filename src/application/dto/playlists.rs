use crate::domain::playlist::Playlist;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistView {
    pub id: String,
    pub service: String,
    pub category: String,
    pub title: String,
    pub url: String,
    pub cover_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Playlist> for PlaylistView {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id.into(),
            service: playlist.service.as_str().to_string(),
            category: playlist.category.as_str().to_string(),
            title: playlist.title,
            url: playlist.url,
            cover_urls: playlist.cover_urls,
            created_at: playlist.created_at,
        }
    }
}
