//! KML style coordinate text, single coordinates and coordinate sequences

pub mod array;
pub mod coord3d;
pub mod parser;

pub use array::{ArrayInput, Coord3dArray};
pub use coord3d::{Coord3d, CoordInput};
pub use parser::{parse_coordinates, parse_point_coordinates, RawPoint};
