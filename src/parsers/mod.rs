pub mod html;
pub mod listing;
pub mod pagination;
pub mod specs;
pub mod text;

#[cfg(test)]
pub(crate) mod tests;

pub use html::ResultPage;
pub use listing::extract_listings;
pub use pagination::resolve_page_count;
pub use specs::{SpecFields, SpecOutcome, normalize_specs};
