//! coordkit - KML style coordinate handling for Rust
//!
//! coordkit parses loosely formatted `<coordinates>` text into ordered
//! longitude/latitude/altitude points, answers winding order questions about
//! polygon rings, and converts degrees-minutes-seconds driver CSVs to decimal
//! degrees.
//!
//! # Examples
//!
//! ## Winding order
//!
//! ```
//! use coordkit::{Coord3dArray, Winding};
//!
//! let mut ring: Coord3dArray = "0,0 1,0 1,1 0,1".parse()?;
//! assert_eq!(ring.winding(), Some(Winding::CounterClockwise));
//!
//! ring.close_loop();
//! ring.reverse_winding_order();
//! assert_eq!(ring.len(), 5);
//! assert_eq!(ring.is_clockwise(), Some(true));
//! # Ok::<(), coordkit::Error>(())
//! ```
//!
//! ## Lenient parsing
//!
//! ```
//! use coordkit::{parse_coordinates, RawPoint};
//!
//! let points = parse_coordinates("1,2 bad 3,4")?;
//! assert_eq!(points, vec![RawPoint::new(1.0, 2.0), RawPoint::new(3.0, 4.0)]);
//! # Ok::<(), coordkit::Error>(())
//! ```

pub mod convert;
pub mod coordinates;
pub mod dms;
pub mod error;
pub mod types;

pub use convert::{convert_driver_file, convert_driver_locations, ConvertSummary};
pub use coordinates::{
    parse_coordinates, parse_point_coordinates, ArrayInput, Coord3d, Coord3dArray, CoordInput,
    RawPoint,
};
pub use dms::dms_to_decimal;
pub use error::{Error, Result};
pub use types::Winding;
