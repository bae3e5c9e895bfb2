//! Degrees-minutes-seconds to decimal degree conversion

use crate::error::{Error, Result};

/// Converts a `degrees-minutes-seconds` string to decimal degrees.
///
/// The fields are delimited by `-`. A leading `-` marks a negative value, so
/// `"-40-30-0"` is -40.5. Only the first three fields are read; anything after
/// the seconds is ignored, so `"40-30-0-1"` is 40.5. Fewer than three fields
/// is an error.
pub fn dms_to_decimal(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let unsigned = trimmed.trim_start_matches('-');
    let negative = unsigned.len() != trimmed.len();

    let fields: Vec<&str> = unsigned.split('-').collect();
    let &[degrees, minutes, seconds, ..] = fields.as_slice() else {
        return Err(Error::InvalidDms(value.to_string()));
    };

    let parse = |field: &str| {
        field
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidDms(value.to_string()))
    };

    let decimal = parse(degrees)? + parse(minutes)? / 60.0 + parse(seconds)? / 3600.0;
    Ok(if negative { -decimal } else { decimal })
}
