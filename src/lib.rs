pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod makes;
pub mod parsers;
pub mod query;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ParseError, ScrapeError, ValidationError};
pub use filter::{Gearbox, RawFilters, SearchFilters};
pub use makes::MakeList;
pub use results::{RecordWriter, VehicleRecord};

use crawlers::{Aggregator, HttpSource};

/// Builder for a vehicle search against the live site
pub struct Search {
    filters: SearchFilters,
    config: ScraperConfig,
}

impl Search {
    /// Create a search with the default configuration
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            config: ScraperConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Fetch every matching listing, one page at a time
    pub async fn collect(&self) -> Result<Vec<VehicleRecord>, ScrapeError> {
        self.config.validate()?;
        let aggregator = Aggregator::new(
            HttpSource::new()?,
            self.config.search_url.clone(),
            self.config.origin_url()?,
        )
        .with_delays(self.config.probe_delay(), self.config.page_delay());

        aggregator.collect_all(&self.filters).await
    }
}
