pub mod articles;
pub mod playlists;
