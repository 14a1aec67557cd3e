mod article_repos;
mod playlist_repos;
mod search_history;

pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
pub use playlist_repos::{FailingPlaylistRepo, InMemoryPlaylistRepo};
pub use search_history::{FailingSearchHistory, InMemorySearchHistory};
