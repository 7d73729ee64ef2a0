pub mod fetcher;
pub mod web;

pub use fetcher::{HttpSource, PageSource};
pub use web::Aggregator;
