// src/domain/playlist/value_objects.rs
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PlaylistId> for String {
    fn from(value: PlaylistId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistService {
    Spotify,
    SoundCloud,
    Yandex,
}

impl PlaylistService {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistService::Spotify => "spotify",
            PlaylistService::SoundCloud => "soundcloud",
            PlaylistService::Yandex => "yandex",
        }
    }
}

impl fmt::Display for PlaylistService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistService {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spotify" => Ok(PlaylistService::Spotify),
            "soundcloud" => Ok(PlaylistService::SoundCloud),
            "yandex" => Ok(PlaylistService::Yandex),
            other => Err(DomainError::Validation(format!(
                "unknown playlist service '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistCategory {
    Motivation,
    Workout,
    SelfDevelopment,
}

impl PlaylistCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistCategory::Motivation => "motivation",
            PlaylistCategory::Workout => "workout",
            PlaylistCategory::SelfDevelopment => "self-development",
        }
    }
}

impl fmt::Display for PlaylistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motivation" => Ok(PlaylistCategory::Motivation),
            "workout" => Ok(PlaylistCategory::Workout),
            "self-development" => Ok(PlaylistCategory::SelfDevelopment),
            other => Err(DomainError::Validation(format!(
                "unknown playlist category '{other}'"
            ))),
        }
    }
}
