use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A point as it appeared in the text, before altitude defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawPoint {
    pub lon: f64,
    pub lat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

impl RawPoint {
    /// Creates a 2D point with no altitude
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: None }
    }

    /// Creates a 3D point
    pub fn new_3d(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt: Some(alt) }
    }
}

/// Parses a single float, ignoring surrounding whitespace
pub(crate) fn parse_float(token: &str) -> Result<f64> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))
}

/// Builds a point from 2 or 3 textual components
pub(crate) fn point_from_parts(parts: &[&str]) -> Result<RawPoint> {
    match parts {
        [lon, lat] => Ok(RawPoint::new(parse_float(lon)?, parse_float(lat)?)),
        [lon, lat, alt] => Ok(RawPoint::new_3d(
            parse_float(lon)?,
            parse_float(lat)?,
            parse_float(alt)?,
        )),
        _ => Err(Error::InvalidArity(parts.len())),
    }
}

/// Parses the text of a single point, allowing spaces around the commas.
///
/// Returns `None` when the text is not exactly 2 or 3 comma separated numbers.
pub fn parse_point_coordinates(coordinates: &str) -> Option<RawPoint> {
    let parts: Vec<&str> = coordinates.trim().split(',').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }
    point_from_parts(&parts).ok()
}

/// Parses the character data of a `<coordinates>` element.
///
/// A string that reads as one sloppy point wins outright. Otherwise the text
/// is split on whitespace and every token with 2 or 3 components becomes a
/// point; tokens with any other component count are dropped. A non-numeric
/// component inside a 2 or 3 component token is an error.
pub fn parse_coordinates(coordinates: &str) -> Result<Vec<RawPoint>> {
    if let Some(point) = parse_point_coordinates(coordinates) {
        return Ok(vec![point]);
    }

    let mut points = Vec::new();
    for token in coordinates.split_whitespace() {
        let parts: Vec<&str> = token.split(',').collect();
        match parts.len() {
            2 | 3 => points.push(point_from_parts(&parts)?),
            n => debug!(token, components = n, "skipping coordinate token"),
        }
    }
    Ok(points)
}
