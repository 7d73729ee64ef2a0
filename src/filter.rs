use crate::error::ValidationError;
use crate::makes::MakeList;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MAX_RESULT_PAGES: i64 = 100;
pub const MAX_RADIUS: i64 = 1500;
pub const MIN_YEAR: i64 = 1920;

static POSTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2,8}$").expect("postcode pattern is valid"));

/// Transmission filter understood by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gearbox {
    Automatic,
    Manual,
}

impl Gearbox {
    pub const ALL: [Gearbox; 2] = [Gearbox::Automatic, Gearbox::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gearbox::Automatic => "Automatic",
            Gearbox::Manual => "Manual",
        }
    }
}

impl fmt::Display for Gearbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gearbox {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gearbox::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new(
                    "gearbox",
                    s,
                    "must be one of the following options: Automatic, Manual",
                )
            })
    }
}

/// Unchecked filter values as they arrive from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFilters {
    pub postcode: String,
    pub results: i64,
    pub radius: i64,
    pub makes: Vec<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub mileage: Option<i64>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
    pub gearbox: Option<String>,
    pub exclude_writeoffs: bool,
}

impl RawFilters {
    pub fn new(postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            results: MAX_RESULT_PAGES,
            radius: MAX_RADIUS,
            makes: Vec::new(),
            min_price: None,
            max_price: None,
            mileage: None,
            min_year: None,
            max_year: None,
            gearbox: None,
            exclude_writeoffs: false,
        }
    }
}

/// Validated search criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub postcode: String,
    pub radius: u32,
    /// Upper bound on result pages fetched per make
    pub max_pages: u32,
    pub makes: Vec<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub max_mileage: Option<u32>,
    pub gearbox: Option<Gearbox>,
    pub exclude_writeoffs: bool,
}

impl SearchFilters {
    /// Checks every value against its accepted range and normalizes postcode,
    /// makes and gearbox. The first offending value is reported.
    pub fn validate(
        raw: RawFilters,
        makes: &MakeList,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        let postcode: String = raw.postcode.split_whitespace().collect();
        if !POSTCODE.is_match(&postcode) {
            return Err(ValidationError::new(
                "postcode",
                &raw.postcode,
                "must be 2 to 8 letters or digits",
            ));
        }

        let max_pages = in_range("results", raw.results, 1, MAX_RESULT_PAGES)?;
        let radius = in_range("radius", raw.radius, 1, MAX_RADIUS)?;
        let min_price = raw
            .min_price
            .map(|v| at_least("minprice", v, 0))
            .transpose()?;
        let max_price = raw
            .max_price
            .map(|v| at_least("maxprice", v, 1))
            .transpose()?;
        let max_mileage = raw
            .mileage
            .map(|v| at_least("mileage", v, 1))
            .transpose()?;

        let latest = i64::from(current_year);
        let min_year = raw
            .min_year
            .map(|v| year("minyear", v, latest))
            .transpose()?;
        let max_year = raw
            .max_year
            .map(|v| year("maxyear", v, latest))
            .transpose()?;

        let makes = raw
            .makes
            .iter()
            .map(|make| {
                makes.find(make).map(str::to_string).ok_or_else(|| {
                    ValidationError::new(
                        "make",
                        make,
                        format!(
                            "not found in accepted list of vehicle makes. Accepted makes are: {}",
                            makes.names().join(", ")
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let gearbox = raw.gearbox.as_deref().map(str::parse::<Gearbox>).transpose()?;

        Ok(Self {
            postcode,
            radius,
            max_pages,
            makes,
            min_price,
            max_price,
            min_year,
            max_year,
            max_mileage,
            gearbox,
            exclude_writeoffs: raw.exclude_writeoffs,
        })
    }
}

fn in_range(flag: &'static str, value: i64, min: i64, max: i64) -> Result<u32, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            flag,
            value,
            format!("must be >= {min} and <= {max}"),
        ));
    }
    u32::try_from(value).map_err(|_| ValidationError::new(flag, value, "is out of range"))
}

fn at_least(flag: &'static str, value: i64, min: i64) -> Result<u32, ValidationError> {
    if value < min {
        return Err(ValidationError::new(flag, value, format!("must be >= {min}")));
    }
    u32::try_from(value).map_err(|_| ValidationError::new(flag, value, "is too large"))
}

fn year(flag: &'static str, value: i64, latest: i64) -> Result<i32, ValidationError> {
    if value < MIN_YEAR || value > latest {
        return Err(ValidationError::new(
            flag,
            value,
            format!("must be >= {MIN_YEAR} and <= the current year ({latest})"),
        ));
    }
    i32::try_from(value).map_err(|_| ValidationError::new(flag, value, "is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn makes() -> MakeList {
        MakeList::from_lines("Ford\nLand Rover\nBMW")
    }

    fn validate(raw: RawFilters) -> Result<SearchFilters, ValidationError> {
        SearchFilters::validate(raw, &makes(), YEAR)
    }

    #[test]
    fn test_defaults() {
        let filters = validate(RawFilters::new("SW1A 1AA")).unwrap();
        assert_eq!(filters.postcode, "SW1A1AA");
        assert_eq!(filters.max_pages, 100);
        assert_eq!(filters.radius, 1500);
        assert!(filters.makes.is_empty());
        assert_eq!(filters.gearbox, None);
        assert!(!filters.exclude_writeoffs);
    }

    #[test]
    fn test_postcode_whitespace_is_removed() {
        let filters = validate(RawFilters::new("  m1 \t1ae ")).unwrap();
        assert_eq!(filters.postcode, "m11ae");

        let err = validate(RawFilters::new("M1&x=1")).unwrap_err();
        assert_eq!(err.flag, "postcode");
    }

    #[test]
    fn test_results_and_radius_bounds() {
        for (results, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            let raw = RawFilters {
                results,
                ..RawFilters::new("M11AE")
            };
            assert_eq!(validate(raw).is_ok(), ok, "--results {results}");
        }

        for (radius, ok) in [(0, false), (1, true), (1500, true), (1501, false)] {
            let raw = RawFilters {
                radius,
                ..RawFilters::new("M11AE")
            };
            assert_eq!(validate(raw).is_ok(), ok, "--radius {radius}");
        }
    }

    #[test]
    fn test_price_and_mileage_bounds() {
        let raw = RawFilters {
            min_price: Some(-1),
            ..RawFilters::new("M11AE")
        };
        assert_eq!(validate(raw).unwrap_err().flag, "minprice");

        let raw = RawFilters {
            min_price: Some(0),
            max_price: Some(1),
            mileage: Some(1),
            ..RawFilters::new("M11AE")
        };
        let filters = validate(raw).unwrap();
        assert_eq!(filters.min_price, Some(0));
        assert_eq!(filters.max_price, Some(1));
        assert_eq!(filters.max_mileage, Some(1));

        let raw = RawFilters {
            max_price: Some(0),
            ..RawFilters::new("M11AE")
        };
        assert_eq!(validate(raw).unwrap_err().flag, "maxprice");

        let raw = RawFilters {
            mileage: Some(0),
            ..RawFilters::new("M11AE")
        };
        assert_eq!(validate(raw).unwrap_err().flag, "mileage");
    }

    #[test]
    fn test_year_bounds() {
        let raw = RawFilters {
            min_year: Some(1900),
            ..RawFilters::new("M11AE")
        };
        let err = validate(raw).unwrap_err();
        assert_eq!(err.flag, "minyear");
        assert_eq!(err.value, "1900");

        let raw = RawFilters {
            min_year: Some(1920),
            max_year: Some(i64::from(YEAR)),
            ..RawFilters::new("M11AE")
        };
        let filters = validate(raw).unwrap();
        assert_eq!(filters.min_year, Some(1920));
        assert_eq!(filters.max_year, Some(YEAR));

        let raw = RawFilters {
            max_year: Some(i64::from(YEAR) + 1),
            ..RawFilters::new("M11AE")
        };
        assert_eq!(validate(raw).unwrap_err().flag, "maxyear");
    }

    #[test]
    fn test_gearbox_is_normalized() {
        let raw = RawFilters {
            gearbox: Some("automatic".to_string()),
            ..RawFilters::new("M11AE")
        };
        assert_eq!(validate(raw).unwrap().gearbox, Some(Gearbox::Automatic));

        assert_eq!("MANUAL".parse::<Gearbox>().unwrap(), Gearbox::Manual);

        let err = "cvt".parse::<Gearbox>().unwrap_err();
        assert_eq!(err.flag, "gearbox");
        assert_eq!(err.value, "cvt");
    }

    #[test]
    fn test_makes_use_canonical_spelling() {
        let raw = RawFilters {
            makes: vec!["land rover".to_string(), "bmw".to_string()],
            ..RawFilters::new("M11AE")
        };
        let filters = validate(raw).unwrap();
        assert_eq!(filters.makes, vec!["Land Rover", "BMW"]);

        let raw = RawFilters {
            makes: vec!["Ford".to_string(), "Trabant".to_string()],
            ..RawFilters::new("M11AE")
        };
        let err = validate(raw).unwrap_err();
        assert_eq!(err.flag, "make");
        assert_eq!(err.value, "Trabant");
        assert!(err.to_string().contains("Accepted makes are: Ford, Land Rover, BMW"));
    }
}
