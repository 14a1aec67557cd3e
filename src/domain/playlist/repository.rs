// src/domain/playlist/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::playlist::entity::Playlist;
use crate::domain::playlist::value_objects::PlaylistService;
use async_trait::async_trait;

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// All playlists, newest first, optionally restricted to one service.
    async fn list(&self, service: Option<PlaylistService>) -> DomainResult<Vec<Playlist>>;
}
