mod recent;

pub use recent::{MAX_RECENT, RecentSearchService};
