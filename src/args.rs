use car_listings::RawFilters;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "car-listings")]
#[command(about = "Scrape AutoTrader for used cars matching the given search criteria")]
#[command(version)]
pub struct Args {
    /// Postcode to search from (spaces are ignored)
    pub postcode: String,

    /// Maximum number of result pages to fetch per make
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub results: i64,

    /// Maximum distance from the postcode, in miles
    #[arg(short, long, default_value_t = 1500, allow_negative_numbers = true)]
    pub radius: i64,

    /// Vehicle make(s); each is searched separately
    #[arg(short, long, num_args = 0..)]
    pub make: Vec<String>,

    /// Minimum price
    #[arg(long, allow_negative_numbers = true)]
    pub minprice: Option<i64>,

    /// Maximum price
    #[arg(long, allow_negative_numbers = true)]
    pub maxprice: Option<i64>,

    /// Maximum mileage
    #[arg(long, allow_negative_numbers = true)]
    pub mileage: Option<i64>,

    /// Minimum year of registration
    #[arg(long, allow_negative_numbers = true)]
    pub minyear: Option<i64>,

    /// Maximum year of registration
    #[arg(long, allow_negative_numbers = true)]
    pub maxyear: Option<i64>,

    /// Type of gearbox (Automatic or Manual)
    #[arg(short, long)]
    pub gearbox: Option<String>,

    /// Exclude write-off categories
    #[arg(short, long)]
    pub exclude: bool,

    /// CSV file to write (overrides the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File listing accepted makes, one per line (overrides the configuration)
    #[arg(long)]
    pub makes_file: Option<PathBuf>,
}

impl Args {
    /// Filter values before validation
    pub fn raw_filters(&self) -> RawFilters {
        RawFilters {
            postcode: self.postcode.clone(),
            results: self.results,
            radius: self.radius,
            makes: self.make.clone(),
            min_price: self.minprice,
            max_price: self.maxprice,
            mileage: self.mileage,
            min_year: self.minyear,
            max_year: self.maxyear,
            gearbox: self.gearbox.clone(),
            exclude_writeoffs: self.exclude,
        }
    }
}
