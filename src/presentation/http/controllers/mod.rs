pub mod articles;
pub mod playlists;
pub mod searches;
