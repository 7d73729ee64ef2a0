use crate::crawlers::PageSource;
use crate::error::ScrapeError;
use crate::filter::SearchFilters;
use crate::parsers::{ResultPage, extract_listings, resolve_page_count};
use crate::query;
use crate::results::VehicleRecord;
use std::time::Duration;
use url::Url;

/// Walks the result pages of one or more searches, one request at a time.
///
/// Every request is followed by a pause: `probe_delay` after the page-count
/// probe and `page_delay` after each results page.
pub struct Aggregator<S> {
    source: S,
    search_url: String,
    origin: Url,
    probe_delay: Duration,
    page_delay: Duration,
}

impl<S: PageSource> Aggregator<S> {
    pub fn new(source: S, search_url: impl Into<String>, origin: Url) -> Self {
        Self {
            source,
            search_url: search_url.into(),
            origin,
            probe_delay: Duration::ZERO,
            page_delay: Duration::ZERO,
        }
    }

    pub fn with_delays(mut self, probe_delay: Duration, page_delay: Duration) -> Self {
        self.probe_delay = probe_delay;
        self.page_delay = page_delay;
        self
    }

    /// Records for every search URL the filters produce, in make order then
    /// page order.
    pub async fn collect_all(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<VehicleRecord>, ScrapeError> {
        let mut records = Vec::new();
        for base_url in query::base_urls(&self.search_url, filters) {
            let found = self.collect(&base_url, filters).await?;
            ::log::info!("{} vehicles found for {}", found.len(), base_url);
            records.extend(found);
        }
        Ok(records)
    }

    /// Records from the pages of a single search URL.
    ///
    /// The bare URL is fetched first to read the page count, which is capped
    /// at `filters.max_pages`. Pages are then requested from 1 upwards.
    pub async fn collect(
        &self,
        base_url: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<VehicleRecord>, ScrapeError> {
        let pages = {
            let body = self.source.fetch(base_url).await?;
            let first = ResultPage::parse(&body);
            resolve_page_count(&first, filters.max_pages)
                .map_err(|e| ScrapeError::parse(base_url, e))?
        };
        ::log::info!("Fetching {} pages for {}", pages, base_url);
        tokio::time::sleep(self.probe_delay).await;

        let mut records = Vec::new();
        for page in 1..=pages {
            let url = query::page_url(base_url, page);
            let body = self.source.fetch(&url).await?;
            let found = extract_listings(&ResultPage::parse(&body), &self.origin)
                .map_err(|e| ScrapeError::parse(&url, e))?;
            ::log::debug!("{} vehicles on {}", found.len(), url);
            records.extend(found);

            ::log::info!("page no. {} parsed", page);
            tokio::time::sleep(self.page_delay).await;
        }

        Ok(records)
    }
}
