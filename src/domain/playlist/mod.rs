pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Playlist;
pub use repository::PlaylistRepository;
pub use value_objects::{PlaylistCategory, PlaylistId, PlaylistService};
