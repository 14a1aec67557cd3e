// src/domain/viewer.rs
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

/// Who is asking. Supplied by the host platform's session provider; this
/// slice only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerRole {
    Admin,
    #[default]
    Regular,
}

impl ViewerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerRole::Admin => "admin",
            ViewerRole::Regular => "regular",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, ViewerRole::Admin)
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ViewerRole::Admin),
            "regular" => Ok(ViewerRole::Regular),
            other => Err(DomainError::Validation(format!(
                "unknown viewer role '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Viewer {
    pub id: AuthorId,
    pub role: ViewerRole,
}

impl Viewer {
    pub fn new(id: AuthorId, role: ViewerRole) -> Self {
        Self { id, role }
    }

    /// A request that carried no identity headers at all.
    pub fn guest() -> Self {
        Self {
            id: AuthorId::new(""),
            role: ViewerRole::Regular,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn has_identity(&self) -> bool {
        !self.id.is_empty()
    }
}
