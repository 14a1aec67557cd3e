// src/domain/playlist/entity.rs
use crate::domain::playlist::value_objects::{PlaylistCategory, PlaylistId, PlaylistService};
use chrono::{DateTime, Utc};

/// A curated external playlist surfaced in the hub. The store may hold rows
/// without a creation timestamp; those sort last.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: PlaylistId,
    pub service: PlaylistService,
    pub category: PlaylistCategory,
    pub title: String,
    pub url: String,
    pub cover_urls: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}
