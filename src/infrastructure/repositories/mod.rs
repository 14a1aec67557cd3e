// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_playlist;

pub use postgres_article::PostgresArticleReadRepository;
pub use postgres_playlist::PostgresPlaylistRepository;
