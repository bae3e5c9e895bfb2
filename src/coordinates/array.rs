use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::coordinates::coord3d::{Coord3d, CoordInput};
use crate::error::{Error, Result};
use crate::types::Winding;

/// The ways a coordinate sequence can be described
#[derive(Debug, Clone, Copy)]
pub enum ArrayInput<'a> {
    /// Whitespace separated `lon,lat[,alt]` groups
    Text(&'a str),
    /// One description per point
    Points(&'a [CoordInput<'a>]),
}

/// An ordered sequence of coordinates, such as a path or polygon ring
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Coord3dArray {
    coords: Vec<Coord3d>,
}

impl Coord3dArray {
    /// Creates an empty array
    pub fn new() -> Self {
        Self { coords: Vec::new() }
    }

    /// Creates an array that takes ownership of `coords`
    pub fn from_coords(coords: Vec<Coord3d>) -> Self {
        Self { coords }
    }

    /// Creates an array from text or from per-point descriptions
    pub fn from_input(input: ArrayInput<'_>) -> Result<Self> {
        match input {
            ArrayInput::Text(s) => Self::from_text(s),
            ArrayInput::Points(points) => Self::from_points(points),
        }
    }

    /// Parses whitespace separated coordinate groups.
    ///
    /// Newlines, tabs and repeated spaces collapse to one space and spaces
    /// next to commas are dropped, so `"1, 2"` stays a single point.
    pub fn from_text(s: &str) -> Result<Self> {
        let normalized = normalize_whitespace(s);
        if normalized.is_empty() {
            return Ok(Self::new());
        }

        let coords = normalized
            .split(' ')
            .map(Coord3d::from_text)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { coords })
    }

    /// Creates an array with one coordinate per description, in order
    pub fn from_points(points: &[CoordInput<'_>]) -> Result<Self> {
        let coords = points
            .iter()
            .map(|&point| Coord3d::from_input(point))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { coords })
    }

    /// Replaces the whole sequence; the array is unchanged on error
    pub fn set_coords(&mut self, input: ArrayInput<'_>) -> Result<()> {
        *self = Self::from_input(input)?;
        Ok(())
    }

    /// Returns the coordinates in sequence order
    pub fn coords(&self) -> &[Coord3d] {
        &self.coords
    }

    /// Returns an iterator over the coordinates
    pub fn iter(&self) -> std::slice::Iter<'_, Coord3d> {
        self.coords.iter()
    }

    /// Returns the number of coordinates
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the array holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Exact equality of the first and last point; no tolerance is applied
    pub fn first_equals_last(&self) -> Result<bool> {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => Ok(first.lon() == last.lon()
                && first.lat() == last.lat()
                && first.alt() == last.alt()),
            _ => Err(Error::EmptySequence),
        }
    }

    /// Appends a copy of the first point unless the ring is already closed
    pub fn close_loop(&mut self) {
        if let Ok(false) = self.first_equals_last() {
            let first = self.coords[0];
            self.coords.push(first);
        }
    }

    /// Shoelace winding test in the lon/lat plane.
    ///
    /// `None` for an empty array. Fewer than three points always report
    /// clockwise. A zero sum counts as counter-clockwise.
    pub fn is_clockwise(&self) -> Option<bool> {
        if self.coords.is_empty() {
            return None;
        }
        if self.coords.len() < 3 {
            return Some(true);
        }
        Some(shoelace_sum(&self.coords) < 0.0)
    }

    /// Returns the winding order; `None` for an empty array
    pub fn winding(&self) -> Option<Winding> {
        self.is_clockwise().map(Winding::from_clockwise)
    }

    /// Reverses the point order, flipping the winding
    pub fn reverse_winding_order(&mut self) {
        self.coords.reverse();
    }

    /// Reverses the array if its winding differs from `target`.
    ///
    /// Returns whether a reversal happened. Empty arrays are left alone.
    pub fn ensure_winding(&mut self, target: Winding) -> bool {
        match self.winding() {
            Some(current) if current != target => {
                self.reverse_winding_order();
                true
            }
            _ => false,
        }
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(", ", ",")
        .replace(" ,", ",")
}

fn shoelace_sum(verts: &[Coord3d]) -> f64 {
    let n = verts.len();
    (0..n)
        .map(|i| {
            let a = &verts[i];
            let b = &verts[(i + 1) % n];
            a.lon() * b.lat() - a.lat() * b.lon()
        })
        .sum()
}

impl fmt::Display for Coord3dArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", coord)?;
        }
        Ok(())
    }
}

impl FromStr for Coord3dArray {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl FromIterator<Coord3d> for Coord3dArray {
    fn from_iter<I: IntoIterator<Item = Coord3d>>(iter: I) -> Self {
        Self { coords: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Coord3dArray {
    type Item = &'a Coord3d;
    type IntoIter = std::slice::Iter<'a, Coord3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::parser::RawPoint;

    #[test]
    fn test_from_text() {
        let array = Coord3dArray::from_text("1,2,3 4,5,6").unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.coords()[0], Coord3d::new(1.0, 2.0, 3.0));
        assert_eq!(array.coords()[1], Coord3d::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_from_text_normalizes_whitespace() {
        let text = "\n\t1, 2,3\n   4 ,5\t\t6 , 7 ,8\r\n";
        let array: Coord3dArray = text.parse().unwrap();
        assert_eq!(
            array.coords(),
            &[
                Coord3d::new(1.0, 2.0, 3.0),
                Coord3d::new_2d(4.0, 5.0),
                Coord3d::new(6.0, 7.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_from_text_errors() {
        assert!(matches!(
            Coord3dArray::from_text("1,2 3"),
            Err(Error::InvalidArity(1))
        ));
        assert!(matches!(
            Coord3dArray::from_text("1,2 3,y"),
            Err(Error::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_blank_text_is_empty() {
        let array = Coord3dArray::from_text(" \n\t ").unwrap();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
        assert_eq!(array.to_string(), "");
    }

    #[test]
    fn test_from_points() {
        let points = [
            CoordInput::Text("1,2"),
            CoordInput::Point(RawPoint::new_3d(3.0, 4.0, 5.0)),
            CoordInput::List(&[6.0, 7.0]),
        ];
        let array = Coord3dArray::from_input(ArrayInput::Points(&points)).unwrap();
        assert_eq!(
            array.to_string(),
            "1.000000,2.000000,0.000000 3.000000,4.000000,5.000000 6.000000,7.000000,0.000000"
        );

        let bad = [CoordInput::Text("1,2"), CoordInput::List(&[1.0])];
        assert!(Coord3dArray::from_points(&bad).is_err());
    }

    #[test]
    fn test_set_coords_replaces() {
        let mut array = Coord3dArray::from_text("1,1 2,2 3,3").unwrap();
        array.set_coords(ArrayInput::Text("9,9")).unwrap();
        assert_eq!(array.len(), 1);

        assert!(array.set_coords(ArrayInput::Text("9")).is_err());
        assert_eq!(array.coords(), &[Coord3d::new_2d(9.0, 9.0)]);
    }

    #[test]
    fn test_display_round_trip() {
        let array = Coord3dArray::from_text("-122.1,37.4,10 -122.2,37.5").unwrap();
        let rendered = array.to_string();
        assert_eq!(rendered, "-122.100000,37.400000,10.000000 -122.200000,37.500000,0.000000");
        assert_eq!(Coord3dArray::from_text(&rendered).unwrap(), array);
    }

    #[test]
    fn test_first_equals_last() {
        let open = Coord3dArray::from_text("0,0 1,0 1,1").unwrap();
        assert!(!open.first_equals_last().unwrap());

        let closed = Coord3dArray::from_text("0,0 1,0 1,1 0,0,0").unwrap();
        assert!(closed.first_equals_last().unwrap());

        let alt_differs = Coord3dArray::from_text("0,0,1 1,0 0,0,2").unwrap();
        assert!(!alt_differs.first_equals_last().unwrap());

        assert!(matches!(
            Coord3dArray::new().first_equals_last(),
            Err(Error::EmptySequence)
        ));
    }

    #[test]
    fn test_close_loop() {
        let mut array = Coord3dArray::from_text("0,0 1,0 1,1").unwrap();
        array.close_loop();
        assert_eq!(array.len(), 4);
        assert_eq!(array.coords()[3], Coord3d::new(0.0, 0.0, 0.0));

        array.close_loop();
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn test_close_loop_single_point_and_empty() {
        let mut single = Coord3dArray::from_text("5,5").unwrap();
        single.close_loop();
        assert_eq!(single.len(), 1);

        let mut empty = Coord3dArray::new();
        empty.close_loop();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_is_clockwise() {
        let mut square = Coord3dArray::from_text("0,0 1,0 1,1 0,1").unwrap();
        assert_eq!(square.is_clockwise(), Some(false));
        assert_eq!(square.winding(), Some(Winding::CounterClockwise));

        square.reverse_winding_order();
        assert_eq!(square.is_clockwise(), Some(true));
        assert_eq!(square.coords()[0], Coord3d::new_2d(0.0, 1.0));
    }

    #[test]
    fn test_is_clockwise_ignores_altitude() {
        let square = Coord3dArray::from_text("0,0,100 0,1,-5 1,1,7 1,0,0").unwrap();
        assert_eq!(square.is_clockwise(), Some(true));
    }

    #[test]
    fn test_is_clockwise_closed_ring() {
        let ring = Coord3dArray::from_text("0,0 1,0 1,1 0,1 0,0").unwrap();
        assert_eq!(ring.is_clockwise(), Some(false));
    }

    #[test]
    fn test_is_clockwise_degenerate() {
        assert_eq!(Coord3dArray::new().is_clockwise(), None);
        assert_eq!(Coord3dArray::new().winding(), None);
        assert_eq!(Coord3dArray::from_text("1,1").unwrap().is_clockwise(), Some(true));
        assert_eq!(Coord3dArray::from_text("0,0 1,1").unwrap().is_clockwise(), Some(true));
        assert_eq!(Coord3dArray::from_text("1,1 0,0").unwrap().is_clockwise(), Some(true));
    }

    #[test]
    fn test_zero_area_is_counter_clockwise() {
        let line = Coord3dArray::from_text("0,0 1,1 2,2").unwrap();
        assert_eq!(line.is_clockwise(), Some(false));
    }

    #[test]
    fn test_reverse_empty() {
        let mut empty = Coord3dArray::new();
        empty.reverse_winding_order();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_ensure_winding() {
        let mut square = Coord3dArray::from_text("0,0 1,0 1,1 0,1").unwrap();
        assert!(!square.ensure_winding(Winding::CounterClockwise));
        assert!(square.ensure_winding(Winding::Clockwise));
        assert_eq!(square.winding(), Some(Winding::Clockwise));

        let mut empty = Coord3dArray::new();
        assert!(!empty.ensure_winding(Winding::Clockwise));
    }

    #[test]
    fn test_collect_from_parsed_points() {
        let array: Coord3dArray = crate::coordinates::parse_coordinates("1,2 junk 3,4,5")
            .unwrap()
            .into_iter()
            .map(Coord3d::from)
            .collect();
        assert_eq!(array.coords(), &[Coord3d::new_2d(1.0, 2.0), Coord3d::new(3.0, 4.0, 5.0)]);
    }

    #[test]
    fn test_iter() {
        let array = Coord3dArray::from_text("1,2 3,4").unwrap();
        let lons: Vec<f64> = array.iter().map(|c| c.lon()).collect();
        assert_eq!(lons, vec![1.0, 3.0]);
        assert_eq!((&array).into_iter().count(), 2);
    }
}
