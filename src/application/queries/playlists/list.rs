use super::PlaylistQueryService;
use crate::application::dto::PlaylistView;
use crate::domain::playlist::PlaylistService;

impl PlaylistQueryService {
    /// Curated playlists, newest first, optionally filtered to one service.
    /// Fail-soft like the article queries: a store error is logged and the
    /// list renders empty.
    pub async fn list_playlists(&self, service: Option<PlaylistService>) -> Vec<PlaylistView> {
        match self.repo.list(service).await {
            Ok(playlists) => playlists.into_iter().map(PlaylistView::from).collect(),
            Err(err) => {
                tracing::error!(error = %err, "playlist fetch failed");
                Vec::new()
            }
        }
    }
}
