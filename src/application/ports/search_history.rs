// src/application/ports/search_history.rs
use crate::domain::errors::DomainResult;

/// Persistence behind the recent-search list, keyed by the owning viewer.
/// The reference implementation is a JSON file per owner; tests swap in an
/// in-memory map.
pub trait SearchHistoryStore: Send + Sync {
    fn load(&self, owner: &str) -> DomainResult<Vec<String>>;
    fn save(&self, owner: &str, queries: &[String]) -> DomainResult<()>;
    fn clear(&self, owner: &str) -> DomainResult<()>;
}
