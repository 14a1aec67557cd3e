// tests/support/mocks/search_history.rs
use std::collections::HashMap;
use std::sync::Mutex;

use hub_core::application::ports::search_history::SearchHistoryStore;
use hub_core::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
pub struct InMemorySearchHistory {
    inner: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemorySearchHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchHistoryStore for InMemorySearchHistory {
    fn load(&self, owner: &str) -> DomainResult<Vec<String>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(owner).cloned().unwrap_or_default())
    }

    fn save(&self, owner: &str, queries: &[String]) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.insert(owner.to_string(), queries.to_vec());
        Ok(())
    }

    fn clear(&self, owner: &str) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(owner);
        Ok(())
    }
}

pub struct FailingSearchHistory;

impl SearchHistoryStore for FailingSearchHistory {
    fn load(&self, _owner: &str) -> DomainResult<Vec<String>> {
        Err(DomainError::Persistence("history store unavailable".into()))
    }

    fn save(&self, _owner: &str, _queries: &[String]) -> DomainResult<()> {
        Err(DomainError::Persistence("history store unavailable".into()))
    }

    fn clear(&self, _owner: &str) -> DomainResult<()> {
        Err(DomainError::Persistence("history store unavailable".into()))
    }
}
