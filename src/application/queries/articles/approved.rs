use super::ArticleQueryService;
use crate::application::dto::ArticleView;
use crate::domain::viewer::Viewer;

impl ArticleQueryService {
    /// The public feed: approved articles, newest first, capped at `limit`.
    /// Each article is projected through the viewer's privacy lens before it
    /// leaves this layer.
    pub async fn list_approved(&self, viewer: &Viewer, limit: u32) -> Vec<ArticleView> {
        let limit = Self::normalize_limit(limit, self.max_limit);

        match self.read_repo.list_approved(limit).await {
            Ok(articles) => articles
                .into_iter()
                .map(|article| ArticleView::project(article, viewer))
                .collect(),
            Err(err) => {
                tracing::error!(error = %err, "approved article fetch failed");
                Vec::new()
            }
        }
    }

    /// `max_limit` comes from configuration and also caps the default.
    pub(super) fn normalize_limit(limit: u32, max_limit: u32) -> u32 {
        const DEFAULT_LIMIT: u32 = 20;

        if limit == 0 {
            DEFAULT_LIMIT.min(max_limit)
        } else {
            limit.min(max_limit)
        }
    }
}
