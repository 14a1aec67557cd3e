// src/domain/author/value_objects.rs
use std::fmt;

/// Opaque author identifier as handed out by the backing store. Unlike the
/// other identifiers in this crate it is allowed to be empty, because
/// upstream rows can carry blank references and the privacy pipeline must
/// still produce a well-formed projection for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorId> for String {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

/// Three-valued visibility setting for an author identity field. Stored
/// flags may be absent entirely, so "visible" is the resolved meaning of
/// both `Unset` and `Shown`; only an explicit `Hidden` redacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Unset,
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Visibility::Unset,
            Some(true) => Visibility::Shown,
            Some(false) => Visibility::Hidden,
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}
