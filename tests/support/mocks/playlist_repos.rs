// tests/support/mocks/playlist_repos.rs
use async_trait::async_trait;

use hub_core::domain::errors::{DomainError, DomainResult};
use hub_core::domain::playlist::{Playlist, PlaylistRepository, PlaylistService};

pub struct InMemoryPlaylistRepo {
    playlists: Vec<Playlist>,
}

impl InMemoryPlaylistRepo {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepo {
    async fn list(&self, service: Option<PlaylistService>) -> DomainResult<Vec<Playlist>> {
        let mut matching: Vec<Playlist> = self
            .playlists
            .iter()
            .filter(|playlist| service.is_none_or(|wanted| playlist.service == wanted))
            .cloned()
            .collect();
        // newest first, rows without a timestamp last
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

pub struct FailingPlaylistRepo;

#[async_trait]
impl PlaylistRepository for FailingPlaylistRepo {
    async fn list(&self, _service: Option<PlaylistService>) -> DomainResult<Vec<Playlist>> {
        Err(DomainError::Persistence("playlist store unavailable".into()))
    }
}
