// src/infrastructure/repositories/postgres_playlist.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::playlist::{
    Playlist, PlaylistCategory, PlaylistId, PlaylistRepository, PlaylistService,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlaylistRow {
    id: String,
    service: String,
    category: String,
    title: String,
    url: String,
    cover_urls: Vec<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<PlaylistRow> for Playlist {
    type Error = DomainError;

    fn try_from(row: PlaylistRow) -> Result<Self, Self::Error> {
        Ok(Playlist {
            id: PlaylistId::new(row.id),
            service: row.service.parse::<PlaylistService>()?,
            category: row.category.parse::<PlaylistCategory>()?,
            title: row.title,
            url: row.url,
            cover_urls: row.cover_urls,
            created_at: row.created_at,
        })
    }
}

const PLAYLIST_COLUMNS: &str = "id, service, category, title, url, cover_urls, created_at";

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn list(&self, service: Option<PlaylistService>) -> DomainResult<Vec<Playlist>> {
        let rows = match service {
            Some(service) => {
                let query = format!(
                    "SELECT {PLAYLIST_COLUMNS} FROM playlists \
                     WHERE service = $1 \
                     ORDER BY created_at DESC NULLS LAST"
                );
                sqlx::query_as::<_, PlaylistRow>(&query)
                    .bind(service.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {PLAYLIST_COLUMNS} FROM playlists \
                     ORDER BY created_at DESC NULLS LAST"
                );
                sqlx::query_as::<_, PlaylistRow>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        // Rows with a service or category this build does not know are
        // skipped rather than failing the whole listing.
        Ok(rows
            .into_iter()
            .filter_map(|row| match Playlist::try_from(row) {
                Ok(playlist) => Some(playlist),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping undecodable playlist row");
                    None
                }
            })
            .collect())
    }
}
