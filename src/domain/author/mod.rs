pub mod entity;
pub mod privacy;
pub mod value_objects;

pub use entity::AuthorRecord;
pub use privacy::{AuthorProjection, resolve};
pub use value_objects::{AuthorId, Visibility};
