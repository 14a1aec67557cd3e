use crate::domain::author::AuthorProjection;
use serde::{Deserialize, Serialize};

/// The author identity a viewer gets to see, already redacted by the
/// privacy policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorView {
    pub id: String,
    pub username: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub reputation: i64,
    pub is_premium: bool,
}

impl From<AuthorProjection> for AuthorView {
    fn from(projection: AuthorProjection) -> Self {
        Self {
            id: projection.id.into(),
            username: projection.username,
            first_name: projection.first_name,
            last_name: projection.last_name,
            avatar_url: projection.avatar_url,
            reputation: projection.reputation,
            is_premium: projection.is_premium,
        }
    }
}
