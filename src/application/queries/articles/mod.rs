mod approved;
mod mine;
mod service;

pub use service::ArticleQueryService;
