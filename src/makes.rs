use crate::error::ScrapeError;
use std::fs;
use std::path::Path;

const EMBEDDED_MAKES: &str = include_str!("../data/vehiclemakes.txt");

/// Reference list of vehicle makes accepted by `--make`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeList {
    names: Vec<String>,
}

impl MakeList {
    /// The list shipped with the crate
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED_MAKES)
    }

    /// One make per line; blank lines are ignored
    pub fn from_lines(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_lines(&text))
    }

    /// Canonical spelling of `make`, matched case-insensitively
    pub fn find(&self, make: &str) -> Option<&str> {
        let wanted = make.trim();
        self.names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
