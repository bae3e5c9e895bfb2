use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::coordinates::parser::{parse_float, RawPoint};
use crate::error::{Error, Result};

/// The ways a single coordinate can be described
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordInput<'a> {
    /// `"lon,lat"` or `"lon,lat,alt"`
    Text(&'a str),
    /// A parsed `(lon, lat[, alt])` tuple
    Point(RawPoint),
    /// Two or three numeric components
    List(&'a [f64]),
}

/// A single longitude, latitude, altitude coordinate.
///
/// Longitude and latitude are degrees and are never normalized. Altitude
/// defaults to 0.0 when not given. `Default` is the zero coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coord3d {
    lon: f64,
    lat: f64,
    alt: f64,
}

impl Coord3d {
    /// Creates a new 3D coordinate
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }

    /// Creates a new 2D coordinate (alt = 0.0)
    pub fn new_2d(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, 0.0)
    }

    /// Creates a coordinate from any supported description
    pub fn from_input(input: CoordInput<'_>) -> Result<Self> {
        match input {
            CoordInput::Text(s) => Self::from_text(s),
            CoordInput::Point(point) => Ok(Self::from_raw(point)),
            CoordInput::List(components) => Self::from_components(components),
        }
    }

    /// Parses comma delimited `lon,lat[,alt]` text
    pub fn from_text(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        check_arity(parts.len())?;

        let mut components = [0.0; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_float(part)?;
        }
        Self::from_components(&components[..parts.len()])
    }

    /// Builds a coordinate from 2 or 3 components
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match *components {
            [lon, lat] => Ok(Self::new_2d(lon, lat)),
            [lon, lat, alt] => Ok(Self::new(lon, lat, alt)),
            _ => Err(Error::InvalidArity(components.len())),
        }
    }

    /// Creates a coordinate from a parsed point, defaulting altitude to 0.0
    pub fn from_raw(point: RawPoint) -> Self {
        Self::new(point.lon, point.lat, point.alt.unwrap_or(0.0))
    }

    /// Replaces all three fields from text; the value is unchanged on error
    pub fn set_from_text(&mut self, s: &str) -> Result<()> {
        *self = Self::from_text(s)?;
        Ok(())
    }

    /// Returns the longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns the latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the altitude
    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// Sets the longitude, converting the value to f64
    pub fn set_lon(&mut self, lon: impl Into<f64>) {
        self.lon = lon.into();
    }

    /// Sets the latitude, converting the value to f64
    pub fn set_lat(&mut self, lat: impl Into<f64>) {
        self.lat = lat.into();
    }

    /// Sets the altitude, converting the value to f64
    pub fn set_alt(&mut self, alt: impl Into<f64>) {
        self.alt = alt.into();
    }
}

fn check_arity(count: usize) -> Result<()> {
    if (2..=3).contains(&count) {
        Ok(())
    } else {
        Err(Error::InvalidArity(count))
    }
}

impl fmt::Display for Coord3d {
    /// Always three fields with six decimals, even when altitude was omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6},{:.6}", self.lon, self.lat, self.alt)
    }
}

impl FromStr for Coord3d {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl From<RawPoint> for Coord3d {
    fn from(point: RawPoint) -> Self {
        Self::from_raw(point)
    }
}
