// This module defines the geometric types the WKB codec operates on:
// `Coordinate` with optional Z and M values, the simple and multi-part
// geometry structs, and the shared traits that give them consistent
// collection behavior. All types are re-exported for public access.

mod coordinate;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinate::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
