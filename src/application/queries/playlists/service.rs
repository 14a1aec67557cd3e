use std::sync::Arc;

use crate::domain::playlist::PlaylistRepository;

pub struct PlaylistQueryService {
    pub(super) repo: Arc<dyn PlaylistRepository>,
}

impl PlaylistQueryService {
    pub fn new(repo: Arc<dyn PlaylistRepository>) -> Self {
        Self { repo }
    }
}
