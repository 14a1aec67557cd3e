mod json_file_history;

pub use json_file_history::JsonFileSearchHistory;
