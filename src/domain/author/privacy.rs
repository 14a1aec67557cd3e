// src/domain/author/privacy.rs
use crate::domain::author::entity::AuthorRecord;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::viewer::Viewer;

/// Substituted for the first name when the author hides their real name.
pub const HIDDEN_NAME_PLACEHOLDER: &str = "Anonymous";

const PLACEHOLDER_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/shapes/svg";

/// Viewer-specific redaction of an author's identity fields. Computed fresh
/// on every read, never persisted, and carries no visibility flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProjection {
    pub id: AuthorId,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub reputation: i64,
    pub is_premium: bool,
}

/// Resolve the author identity a viewer is allowed to see.
///
/// Returns `None` when there is no author to show: either the record is
/// absent, or the post is anonymous and the viewer is not an admin. Admins
/// always see ground truth, anonymous posts included. For regular viewers
/// each identity field honors the author's visibility setting, where unset
/// counts as visible. Reputation and premium status pass through for
/// everyone; they are not identity fields.
///
/// Pure function: no I/O, and the same inputs always produce the same
/// projection.
pub fn resolve(
    author: Option<&AuthorRecord>,
    viewer: &Viewer,
    is_anonymous: bool,
) -> Option<AuthorProjection> {
    let author = author?;

    if is_anonymous && !viewer.is_admin() {
        return None;
    }

    if viewer.is_admin() {
        return Some(AuthorProjection {
            id: author.id.clone(),
            username: author.username.clone(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            avatar_url: author.avatar_url.clone(),
            reputation: author.reputation,
            is_premium: author.is_premium,
        });
    }

    let username = if author.show_username.is_hidden() {
        String::new()
    } else {
        author.username.clone()
    };

    let (first_name, last_name) = if author.show_name.is_hidden() {
        (HIDDEN_NAME_PLACEHOLDER.to_string(), None)
    } else {
        (author.first_name.clone(), author.last_name.clone())
    };

    let avatar_url = if author.show_avatar.is_hidden() {
        Some(placeholder_avatar_url(&author.id))
    } else {
        author.avatar_url.clone()
    };

    Some(AuthorProjection {
        id: author.id.clone(),
        username,
        first_name,
        last_name,
        avatar_url,
        reputation: author.reputation,
        is_premium: author.is_premium,
    })
}

/// Deterministic fallback avatar, keyed on the author id so the same author
/// always gets the same image. An empty id seeds a fixed literal; the
/// result is never an empty string.
pub fn placeholder_avatar_url(id: &AuthorId) -> String {
    let seed = if id.is_empty() { "anon" } else { id.as_str() };
    format!("{PLACEHOLDER_AVATAR_BASE}?seed={seed}")
}
