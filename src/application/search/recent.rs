// src/application/search/recent.rs
use std::sync::Arc;

use crate::application::ports::SearchHistoryPort;
use crate::domain::viewer::Viewer;

/// How many queries the recent list keeps per viewer.
pub const MAX_RECENT: usize = 5;

/// Per-viewer MRU list of search queries. Recording a query moves it to the
/// front, drops any older duplicate, and trims the list to `MAX_RECENT`.
/// Store failures are logged and degrade to an empty list; searching must
/// keep working without its history.
pub struct RecentSearchService {
    store: Arc<SearchHistoryPort>,
}

impl RecentSearchService {
    pub fn new(store: Arc<SearchHistoryPort>) -> Self {
        Self { store }
    }

    pub fn recent(&self, viewer: &Viewer) -> Vec<String> {
        match self.store.load(viewer.id.as_str()) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, viewer = %viewer.id, "search history load failed");
                Vec::new()
            }
        }
    }

    /// Returns the updated list. Blank queries are ignored.
    pub fn record(&self, viewer: &Viewer, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return self.recent(viewer);
        }

        let mut entries = self.recent(viewer);
        entries.retain(|entry| entry.as_str() != query);
        entries.insert(0, query.to_string());
        entries.truncate(MAX_RECENT);

        if let Err(err) = self.store.save(viewer.id.as_str(), &entries) {
            tracing::warn!(error = %err, viewer = %viewer.id, "search history save failed");
        }
        entries
    }

    pub fn clear(&self, viewer: &Viewer) {
        if let Err(err) = self.store.clear(viewer.id.as_str()) {
            tracing::warn!(error = %err, viewer = %viewer.id, "search history clear failed");
        }
    }
}
