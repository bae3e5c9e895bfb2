use serde::Serialize;

/// A driver row as read from the input CSV, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLocation {
    /// Latitude as `degrees-minutes-seconds`
    pub lat: String,
    /// Longitude as `degrees-minutes-seconds`
    pub long: String,
    /// Empty when the row has no third column
    pub driver_id: String,
}

/// A converted row, written as `latitude,longitude,driver_id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecimalLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub driver_id: String,
}

/// Counts reported after a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConvertSummary {
    /// Number of rows written
    pub rows: u64,
}
