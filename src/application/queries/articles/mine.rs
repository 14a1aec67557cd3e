use super::ArticleQueryService;
use crate::application::dto::ArticleView;
use crate::domain::viewer::Viewer;

impl ArticleQueryService {
    /// Everything the viewer has authored, drafts and rejections included,
    /// newest first. A viewer without an identity owns nothing.
    pub async fn list_for_author(&self, viewer: &Viewer) -> Vec<ArticleView> {
        if !viewer.has_identity() {
            tracing::debug!("own-articles query without viewer identity");
            return Vec::new();
        }

        match self.read_repo.list_by_author(&viewer.id).await {
            Ok(articles) => articles
                .into_iter()
                .map(|article| ArticleView::project(article, viewer))
                .collect(),
            Err(err) => {
                tracing::error!(error = %err, viewer = %viewer.id, "own article fetch failed");
                Vec::new()
            }
        }
    }
}
