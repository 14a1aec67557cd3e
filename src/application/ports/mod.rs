// src/application/ports/mod.rs
pub mod search_history;

pub type SearchHistoryPort = dyn search_history::SearchHistoryStore;
