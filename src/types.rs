//! Core data types for coordkit

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Polygon winding order in the lon/lat plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// Negative shoelace sum
    Clockwise,
    /// Positive or zero shoelace sum
    CounterClockwise,
}

impl Winding {
    /// Maps the boolean clockwise flag onto a winding
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Returns true for clockwise winding
    pub fn is_clockwise(&self) -> bool {
        matches!(self, Winding::Clockwise)
    }

    /// Returns the short name of this winding
    pub fn name(&self) -> &'static str {
        match self {
            Winding::Clockwise => "cw",
            Winding::CounterClockwise => "ccw",
        }
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Winding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Winding::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Ok(Winding::CounterClockwise),
            other => Err(format!("unknown winding order: {}", other)),
        }
    }
}
