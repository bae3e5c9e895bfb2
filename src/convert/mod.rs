//! Driver location CSV conversion from degrees-minutes-seconds to decimal degrees

pub mod models;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::dms::dms_to_decimal;
use crate::error::{Error, Result};
pub use models::{ConvertSummary, DecimalLocation, DriverLocation};

/// Default input file of the driver conversion
pub const DEFAULT_INPUT: &str = "driverlocations.csv";

/// Default output file of the driver conversion
pub const DEFAULT_OUTPUT: &str = "testdata.csv";

impl DriverLocation {
    /// Creates a row from the first three fields of a record.
    ///
    /// Fields past the third are ignored. A missing driver id becomes an
    /// empty string; a missing latitude or longitude is an `InvalidDms` error.
    pub fn from_record(record: &csv::StringRecord) -> Result<Self> {
        let field = |index: usize| {
            record
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidDms(String::new()))
        };

        Ok(Self {
            lat: field(0)?,
            long: field(1)?,
            driver_id: record.get(2).unwrap_or_default().to_string(),
        })
    }

    /// Returns the row with both coordinates in decimal degrees
    pub fn to_decimal(&self) -> Result<DecimalLocation> {
        Ok(DecimalLocation {
            latitude: dms_to_decimal(&self.lat)?,
            longitude: dms_to_decimal(&self.long)?,
            driver_id: self.driver_id.clone(),
        })
    }
}

/// Converts `Lat,Long,Driverid` rows to `latitude,longitude,driver_id` rows.
///
/// Columns are taken by position and rows may be ragged: extra fields are
/// ignored and a missing driver id is written empty. The first row is treated
/// as a header and skipped whatever it contains; the output has no header row.
/// Errors carry the input line they came from.
pub fn convert_driver_locations<R: Read, W: Write>(
    input: R,
    output: W,
) -> Result<ConvertSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    let mut summary = ConvertSummary::default();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let converted = DriverLocation::from_record(&record)
            .and_then(|row| row.to_decimal())
            .map_err(|e| Error::Line { line, source: Box::new(e) })?;

        debug!(line, driver_id = %converted.driver_id, "converted row");
        writer.serialize(&converted)?;
        summary.rows += 1;
    }
    writer.flush()?;

    Ok(summary)
}

/// Converts the driver CSV at `input` and writes the result to `output`
pub fn convert_driver_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ConvertSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let summary = convert_driver_locations(File::open(input)?, File::create(output)?)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = summary.rows,
        "converted driver locations"
    );
    Ok(summary)
}
