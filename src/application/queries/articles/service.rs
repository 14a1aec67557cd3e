use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

/// Read-side article operations. Every query here is fail-soft: a backing
/// store error is logged and collapses to an empty result, so presentation
/// always has something to render.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) max_limit: u32,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, max_limit: u32) -> Self {
        Self {
            read_repo,
            max_limit,
        }
    }
}
