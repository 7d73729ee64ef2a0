use crate::error::ParseError;
use crate::parsers::ResultPage;
use scraper::Selector;
use std::sync::LazyLock;

const COUNT_CSS: &str = "li.paginationMini__count";

static COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COUNT_CSS).expect("count selector is valid"));

/// Total number of result pages advertised by the pagination indicator,
/// e.g. "Page 1 of 1,234".
pub fn total_pages(page: &ResultPage) -> Result<u32, ParseError> {
    let text = page
        .first_text(&COUNT)
        .ok_or(ParseError::MissingElement(COUNT_CSS))?;

    let total = text
        .split_whitespace()
        .nth(3)
        .map(|token| token.replace(',', ""))
        .and_then(|token| token.parse::<u32>().ok());
    total.ok_or(ParseError::InvalidCount(text))
}

/// Number of pages to fetch: the advertised total capped at `requested_max`
pub fn resolve_page_count(first_page: &ResultPage, requested_max: u32) -> Result<u32, ParseError> {
    let total = total_pages(first_page)?;
    ::log::debug!("Pagination reports {} pages, limit {}", total, requested_max);
    Ok(requested_max.min(total))
}
