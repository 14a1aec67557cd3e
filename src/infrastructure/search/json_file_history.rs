// src/infrastructure/search/json_file_history.rs
use crate::application::ports::search_history::SearchHistoryStore;
use crate::domain::errors::{DomainError, DomainResult};
use std::{fs, io, path::PathBuf};

/// One JSON file per owner under a base directory. Owner ids are opaque
/// strings, so they are sanitized before becoming file names.
pub struct JsonFileSearchHistory {
    base_dir: PathBuf,
}

impl JsonFileSearchHistory {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    // Owners that sanitize to the same string must not share a file, so the
    // name carries a short digest of the raw id.
    fn path_for(&self, owner: &str) -> PathBuf {
        let name: String = owner
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let digest = blake3::hash(owner.as_bytes()).to_hex();
        let tag = &digest.as_str()[..8];
        self.base_dir.join(format!("{name}-{tag}.json"))
    }
}

fn persistence(err: impl std::fmt::Display) -> DomainError {
    DomainError::Persistence(err.to_string())
}

impl SearchHistoryStore for JsonFileSearchHistory {
    fn load(&self, owner: &str) -> DomainResult<Vec<String>> {
        match fs::read_to_string(self.path_for(owner)) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| DomainError::Persistence(format!("corrupt search history: {err}"))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(persistence(err)),
        }
    }

    fn save(&self, owner: &str, queries: &[String]) -> DomainResult<()> {
        let path = self.path_for(owner);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
        let raw = serde_json::to_string(queries).map_err(persistence)?;
        fs::write(&path, raw).map_err(persistence)
    }

    fn clear(&self, owner: &str) -> DomainResult<()> {
        match fs::remove_file(self.path_for(owner)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(persistence(err)),
        }
    }
}
