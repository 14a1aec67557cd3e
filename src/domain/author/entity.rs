// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, Visibility};

/// An author row as stored, visibility flags included. Never leaves the
/// domain layer in this shape; readers only ever see the projection
/// produced by `privacy::resolve`.
#[derive(Debug, Clone)]
pub struct AuthorRecord {
    pub id: AuthorId,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub reputation: i64,
    pub is_premium: bool,
    pub show_username: Visibility,
    pub show_name: Visibility,
    pub show_avatar: Visibility,
}
