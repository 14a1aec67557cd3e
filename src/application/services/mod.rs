// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::SearchHistoryPort,
        queries::{articles::ArticleQueryService, playlists::PlaylistQueryService},
        search::RecentSearchService,
    },
    domain::{article::ArticleReadRepository, playlist::PlaylistRepository},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub playlist_queries: Arc<PlaylistQueryService>,
    pub recent_searches: Arc<RecentSearchService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        playlist_repo: Arc<dyn PlaylistRepository>,
        search_history_store: Arc<SearchHistoryPort>,
        feed_max_limit: u32,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            feed_max_limit,
        ));
        let playlist_queries = Arc::new(PlaylistQueryService::new(Arc::clone(&playlist_repo)));
        let recent_searches = Arc::new(RecentSearchService::new(Arc::clone(
            &search_history_store,
        )));

        Self {
            article_queries,
            playlist_queries,
            recent_searches,
        }
    }
}
