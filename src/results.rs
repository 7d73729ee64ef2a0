use crate::error::ScrapeError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Distance value used when a seller publishes no distance
pub const DISTANCE_UNAVAILABLE: &str = "N/A";

/// Column names of the CSV output, in row order
pub const HEADERS: [&str; 12] = [
    "Product Title",
    "Price (£)",
    "Reg",
    "Body Type",
    "Mileage",
    "Engine Size",
    "Engine Power",
    "Gearbox",
    "Fuel Type",
    "Seller Name",
    "Distance (miles)",
    "URL",
];

/// One vehicle listing extracted from a results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub title: String,

    /// Digits only, currency symbol and separators removed
    pub price: String,

    pub reg: String,
    pub body_type: String,
    pub mileage: String,
    pub engine_size: String,
    pub engine_power: Option<String>,
    pub gearbox: String,
    pub fuel_type: String,
    pub seller_name: String,

    /// Miles from the search postcode, or [`DISTANCE_UNAVAILABLE`]
    pub distance: String,

    /// Absolute URL of the listing's detail page
    pub url: String,
}

impl VehicleRecord {
    /// Field values in [`HEADERS`] order
    pub fn fields(&self) -> [&str; 12] {
        [
            self.title.as_str(),
            self.price.as_str(),
            self.reg.as_str(),
            self.body_type.as_str(),
            self.mileage.as_str(),
            self.engine_size.as_str(),
            self.engine_power.as_deref().unwrap_or(""),
            self.gearbox.as_str(),
            self.fuel_type.as_str(),
            self.seller_name.as_str(),
            self.distance.as_str(),
            self.url.as_str(),
        ]
    }
}

/// Writes the header row on creation and one row per record afterwards
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl RecordWriter<File> {
    /// Creates or truncates `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Result<Self, ScrapeError> {
        let mut inner = csv::Writer::from_writer(writer);
        inner.write_record(HEADERS)?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write(&mut self, record: &VehicleRecord) -> Result<(), ScrapeError> {
        self.inner.write_record(record.fields())?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a VehicleRecord>,
    ) -> Result<(), ScrapeError> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Number of data rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the underlying writer
    pub fn finish(self) -> Result<W, ScrapeError> {
        self.inner
            .into_inner()
            .map_err(|e| ScrapeError::Io(e.into_error()))
    }
}
