use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Runtime settings for a scrape, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Search results endpoint, without a query string
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Origin prefixed to the relative listing links
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Pause after the page-count probe, in milliseconds
    #[serde(default = "default_probe_delay_ms")]
    pub probe_delay_ms: u64,

    /// Pause after every results page, in milliseconds
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Where the CSV is written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Replacement for the built-in list of accepted makes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub makes_file: Option<String>,
}

/// Default value for search_url
fn default_search_url() -> String {
    "https://www.autotrader.co.uk/car-search".to_string()
}

/// Default value for origin
fn default_origin() -> String {
    "https://www.autotrader.co.uk".to_string()
}

fn default_probe_delay_ms() -> u64 {
    1000
}

fn default_page_delay_ms() -> u64 {
    3000
}

fn default_output_path() -> String {
    "results.csv".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            origin: default_origin(),
            probe_delay_ms: default_probe_delay_ms(),
            page_delay_ms: default_page_delay_ms(),
            output_path: default_output_path(),
            makes_file: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both URLs are absolute and that the search URL carries no query
    pub fn validate(&self) -> Result<(), ScrapeError> {
        let search = Url::parse(&self.search_url)
            .map_err(|e| ScrapeError::Config(format!("search_url \"{}\": {e}", self.search_url)))?;
        if search.query().is_some() {
            return Err(ScrapeError::Config(format!(
                "search_url \"{}\" must not contain a query string",
                self.search_url
            )));
        }
        self.origin_url()?;
        Ok(())
    }

    pub fn origin_url(&self) -> Result<Url, ScrapeError> {
        Url::parse(&self.origin)
            .map_err(|e| ScrapeError::Config(format!("origin \"{}\": {e}", self.origin)))
    }

    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = ScraperConfig::from_json("{}").unwrap();
        assert_eq!(config, ScraperConfig::default());
        assert_eq!(config.probe_delay(), Duration::from_secs(1));
        assert_eq!(config.page_delay(), Duration::from_secs(3));
        assert_eq!(config.output_path, "results.csv");
    }

    #[test]
    fn test_overrides() {
        let config = ScraperConfig::from_json(
            r#"{"page_delay_ms": 0, "output_path": "out.csv", "makes_file": "makes.txt"}"#,
        )
        .unwrap();
        assert_eq!(config.page_delay_ms, 0);
        assert_eq!(config.probe_delay_ms, 1000);
        assert_eq!(config.output_path, "out.csv");
        assert_eq!(config.makes_file.as_deref(), Some("makes.txt"));
    }

    #[test]
    fn test_rejects_bad_urls() {
        let err = ScraperConfig::from_json(r#"{"origin": "not a url"}"#).unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));

        let err =
            ScraperConfig::from_json(r#"{"search_url": "https://example.com/search?sort=x"}"#)
                .unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }
}
