// src/domain/article/value_objects.rs
use std::fmt;

/// Opaque article identifier as handed out by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Moderation state of an article. The rejection reason lives inside the
/// `Rejected` variant, so a reason cannot exist without a rejection and a
/// rejection always carries one (possibly empty when the moderator gave
/// none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationStatus {
    Draft,
    Pending,
    Approved,
    Rejected { reason: String },
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Draft => "draft",
            ModerationStatus::Pending => "pending",
            ModerationStatus::Approved => "approved",
            ModerationStatus::Rejected { .. } => "rejected",
        }
    }

    /// Decode the loose stored pair. Unknown or absent status values come
    /// back as `None` and get defaulted further up; a stray reason on a
    /// non-rejected row is discarded.
    pub fn from_parts(status: Option<&str>, reason: Option<String>) -> Option<Self> {
        match status? {
            "draft" => Some(ModerationStatus::Draft),
            "pending" => Some(ModerationStatus::Pending),
            "approved" => Some(ModerationStatus::Approved),
            "rejected" => Some(ModerationStatus::Rejected {
                reason: reason.unwrap_or_default(),
            }),
            _ => None,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            ModerationStatus::Rejected { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ModerationStatus::Approved)
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    VideoEmbed,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::VideoEmbed => "video-embed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(MediaKind::Image),
            "video-embed" => Some(MediaKind::VideoEmbed),
            _ => None,
        }
    }
}

/// Attached media. Absent entirely when the article has none, which covers
/// the stored `none` media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMedia {
    pub url: String,
    pub kind: MediaKind,
}
