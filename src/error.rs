use thiserror::Error;

/// A CLI value outside its accepted range or set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("--{flag} \"{value}\" {constraint}")]
pub struct ValidationError {
    pub flag: &'static str,
    pub value: String,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(flag: &'static str, value: impl ToString, constraint: impl Into<String>) -> Self {
        Self {
            flag,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}

/// Markup on a results page did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected element `{0}` not found")]
    MissingElement(&'static str),

    #[error("element `{element}` has no `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("could not read a result count from \"{0}\"")]
    InvalidCount(String),

    #[error("invalid listing link \"{href}\": {reason}")]
    InvalidLink { href: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn parse(url: &str, source: ParseError) -> Self {
        Self::Parse {
            url: url.to_string(),
            source,
        }
    }
}
