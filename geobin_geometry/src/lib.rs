//! Conversion of in-memory vector geometries to and from Well-Known Binary.
//!
//! The crate contains a small generic geometry model (points, lines,
//! polygons and their multi-part variants, with optional Z and M
//! dimensions), the ring winding and shell/hole grouping step needed to
//! serialize polygons correctly, and a WKB encoder and decoder supporting
//! both NDR (little-endian) and XDR (big-endian) byte order.
//!
//! # Examples
//!
//! ```rust
//! use anyhow::Result;
//! use geobin_geometry::{Coordinate, Geometry, PointGeometry};
//! use geobin_geometry::wkb::{WkbByteOrder, WkbConverter};
//!
//! fn main() -> Result<()> {
//! 	let point = Geometry::from(PointGeometry::new(Coordinate::new(13.4, 52.5)));
//!
//! 	let converter = WkbConverter::new(WkbByteOrder::Ndr);
//! 	let wkb = converter.encode(&point)?;
//! 	let decoded = converter.decode(wkb.as_slice(), None)?;
//!
//! 	assert_eq!(decoded, point);
//! 	Ok(())
//! }
//! ```

mod geo;
pub mod math;
pub mod wkb;

pub use geo::*;
