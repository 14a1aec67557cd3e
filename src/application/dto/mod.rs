pub mod articles;
pub mod authors;
pub mod playlists;

pub use articles::ArticleView;
pub use authors::AuthorView;
pub use playlists::PlaylistView;
