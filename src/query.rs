use crate::filter::SearchFilters;
use url::form_urlencoded;

/// Search URLs for a filter set: one per requested make, or a single URL
/// when no make is given. Parameters are emitted in a fixed order and only
/// when the corresponding filter is set.
pub fn base_urls(search_url: &str, filters: &SearchFilters) -> Vec<String> {
    let common = common_url(search_url, filters);
    if filters.makes.is_empty() {
        return vec![common];
    }

    filters
        .makes
        .iter()
        .map(|make| format!("{common}&make={}", encode(make)))
        .collect()
}

/// Appends the page number to a base URL
pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{base_url}&page={page}")
}

fn common_url(search_url: &str, filters: &SearchFilters) -> String {
    let mut url = format!(
        "{search_url}?sort=relevance&postcode={}&radius={}",
        encode(&filters.postcode),
        filters.radius
    );

    // A zero minimum price filters nothing and is left out
    if let Some(price) = filters.min_price.filter(|price| *price > 0) {
        url.push_str(&format!("&price-from={price}"));
    }
    if let Some(price) = filters.max_price {
        url.push_str(&format!("&price-to={price}"));
    }
    if let Some(year) = filters.min_year {
        url.push_str(&format!("&year-from={year}"));
    }
    if let Some(year) = filters.max_year {
        url.push_str(&format!("&year-to={year}"));
    }
    if let Some(mileage) = filters.max_mileage {
        url.push_str(&format!("&maximum-mileage={mileage}"));
    }
    if let Some(gearbox) = filters.gearbox {
        url.push_str(&format!("&transmission={gearbox}"));
    }
    if filters.exclude_writeoffs {
        url.push_str("&exclude-writeoff-categories=on");
    }

    url
}

/// Percent-encodes a query value; spaces become `%20`
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
