//! Well-Known Binary (WKB) encoding and decoding.
//!
//! [`WkbConverter`] converts geometries to and from the OGC WKB wire format.
//! The byte order of written output is the converter's only setting; decoded
//! input announces its own order in the leading marker byte. Dimensionality
//! (Z/M) is detected from the data: on encode from the geometry's
//! coordinates, on decode strictly from the wire type code.
//!
//! # Examples
//!
//! ```rust
//! use anyhow::Result;
//! use geobin_geometry::{Coordinate, Geometry, PointGeometry};
//! use geobin_geometry::wkb::{WkbByteOrder, WkbConverter};
//!
//! fn main() -> Result<()> {
//! 	let converter = WkbConverter::new(WkbByteOrder::Xdr);
//! 	let point = Geometry::from(PointGeometry::new(Coordinate::new(12.0, 34.0)));
//!
//! 	let wkb = converter.encode(&point)?;
//! 	assert_eq!(converter.decode(wkb.as_slice(), None)?, point);
//! 	Ok(())
//! }
//! ```

mod byte_order;
mod error;
mod read;
mod type_code;
mod write;

pub use byte_order::*;
pub use error::*;
pub use type_code::*;

use crate::geo::{Geometry, Srid};
use anyhow::{Context, Result};
use geobin_core::Blob;
use std::io::{Read, Write};

/// Converts geometries to and from Well-Known Binary.
///
/// A converter only holds its immutable byte-order setting, so one instance
/// can be reused freely and concurrently; neither operation keeps state
/// between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WkbConverter {
	byte_order: WkbByteOrder,
}

impl WkbConverter {
	/// Creates a converter writing the given byte order.
	///
	/// `WkbConverter::default()` writes NDR (little-endian).
	#[must_use]
	pub fn new(byte_order: WkbByteOrder) -> Self {
		Self { byte_order }
	}

	/// Returns the byte order this converter writes.
	#[must_use]
	pub fn byte_order(&self) -> WkbByteOrder {
		self.byte_order
	}

	/// Encodes a geometry into a WKB byte buffer.
	pub fn encode(&self, geometry: &Geometry) -> Result<Blob> {
		log::trace!("encoding {} to wkb ({:?})", geometry.type_name(), self.byte_order);
		write::encode_geometry(geometry, self.byte_order)
	}

	/// Encodes a geometry and writes it to `sink`, returning the number of
	/// bytes written.
	///
	/// The geometry is encoded in full before anything is written, so a
	/// failed encode leaves the sink untouched.
	pub fn write(&self, geometry: &Geometry, sink: &mut dyn Write) -> Result<u64> {
		let blob = self.encode(geometry)?;
		sink.write_all(blob.as_slice()).context("failed to write wkb to sink")?;
		Ok(blob.len())
	}

	/// Decodes a WKB byte buffer into a geometry.
	///
	/// If `srid` is given it is attached to the returned geometry; the WKB
	/// payload in this profile never carries one itself.
	pub fn decode(&self, bytes: &[u8], srid: Option<Srid>) -> Result<Geometry> {
		log::trace!("decoding {} bytes of wkb", bytes.len());
		read::decode_geometry(bytes, srid)
	}

	/// Reads `source` to its end and decodes the bytes into a geometry.
	pub fn read(&self, source: &mut dyn Read, srid: Option<Srid>) -> Result<Geometry> {
		let mut bytes = Vec::new();
		source
			.read_to_end(&mut bytes)
			.context("failed to read wkb from source")?;
		self.decode(&bytes, srid)
	}
}

/// Encodes a geometry with the default little-endian byte order.
pub fn to_wkb(geometry: &Geometry) -> Result<Blob> {
	WkbConverter::default().encode(geometry)
}

/// Decodes a WKB byte buffer, attaching `srid` if given.
pub fn from_wkb(bytes: &[u8], srid: Option<Srid>) -> Result<Geometry> {
	WkbConverter::default().decode(bytes, srid)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{
		Coordinate, Dimensions, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
		MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
	};
	use rstest::rstest;

	fn coordinate(x: f64, y: f64, dimensions: Dimensions) -> Coordinate {
		Coordinate {
			x,
			y,
			z: dimensions.has_z.then_some(x + 100.0),
			m: dimensions.has_m.then_some(y + 200.0),
		}
	}

	fn sample_geometries(dimensions: Dimensions) -> Vec<Geometry> {
		let c = |x, y| coordinate(x, y, dimensions);
		vec![
			Geometry::Point(PointGeometry::new(c(12.0, 34.0))),
			Geometry::MultiPoint(MultiPointGeometry {
				points: vec![c(1.0, 2.0), c(3.0, 4.0)],
				srid: None,
			}),
			Geometry::LineString(LineStringGeometry {
				coordinates: vec![c(0.0, 0.0), c(5.0, 5.0), c(10.0, 0.0)],
				srid: None,
			}),
			Geometry::MultiLineString(MultiLineStringGeometry {
				lines: vec![
					LineStringGeometry {
						coordinates: vec![c(0.0, 0.0), c(1.0, 1.0)],
						srid: None,
					},
					LineStringGeometry {
						coordinates: vec![c(2.0, 2.0), c(3.0, 3.0)],
						srid: None,
					},
				],
				srid: None,
			}),
			Geometry::Polygon(PolygonGeometry {
				rings: vec![RingGeometry(vec![
					c(0.0, 0.0),
					c(10.0, 0.0),
					c(10.0, 10.0),
					c(0.0, 10.0),
					c(0.0, 0.0),
				])],
				srid: None,
			}),
			Geometry::MultiPolygon(MultiPolygonGeometry {
				polygons: vec![
					PolygonGeometry {
						rings: vec![
							RingGeometry(vec![
								c(0.0, 0.0),
								c(10.0, 0.0),
								c(10.0, 10.0),
								c(0.0, 10.0),
								c(0.0, 0.0),
							]),
							RingGeometry(vec![
								c(2.0, 2.0),
								c(2.0, 4.0),
								c(4.0, 4.0),
								c(4.0, 2.0),
								c(2.0, 2.0),
							]),
						],
						srid: None,
					},
					PolygonGeometry {
						rings: vec![RingGeometry(vec![
							c(20.0, 0.0),
							c(30.0, 0.0),
							c(30.0, 10.0),
							c(20.0, 10.0),
							c(20.0, 0.0),
						])],
						srid: None,
					},
				],
				srid: None,
			}),
		]
	}

	#[rstest]
	#[case(WkbByteOrder::Ndr)]
	#[case(WkbByteOrder::Xdr)]
	fn roundtrip_all_shapes_and_dimensions(#[case] byte_order: WkbByteOrder) {
		let converter = WkbConverter::new(byte_order);
		for has_z in [false, true] {
			for has_m in [false, true] {
				for geometry in sample_geometries(Dimensions::new(has_z, has_m)) {
					let wkb = converter.encode(&geometry).unwrap();
					let decoded = converter.decode(wkb.as_slice(), None).unwrap();
					assert_eq!(decoded, geometry, "{} {:?}", geometry.type_name(), byte_order);
					assert_eq!(decoded.dimensions(), Dimensions::new(has_z, has_m));
				}
			}
		}
	}

	#[test]
	fn both_orders_encode_the_same_geometry_differently() {
		let geometry = Geometry::Point(PointGeometry::new(Coordinate::new(12.0, 34.0)));
		let ndr = WkbConverter::new(WkbByteOrder::Ndr).encode(&geometry).unwrap();
		let xdr = WkbConverter::new(WkbByteOrder::Xdr).encode(&geometry).unwrap();
		assert_ne!(ndr, xdr);
		assert_eq!(from_wkb(ndr.as_slice(), None).unwrap(), geometry);
		assert_eq!(from_wkb(xdr.as_slice(), None).unwrap(), geometry);
	}

	#[rstest]
	#[case(Coordinate::new(12.0, 34.0), Dimensions::XY)]
	#[case(Coordinate::with_z(12.0, 34.0, 56.0), Dimensions::new(true, false))]
	#[case(Coordinate::with_m(12.0, 34.0, 56.0), Dimensions::new(false, true))]
	#[case(Coordinate::with_zm(12.0, 34.0, 56.0, 78.0), Dimensions::new(true, true))]
	fn point_roundtrip_keeps_exact_values(#[case] coordinate: Coordinate, #[case] dimensions: Dimensions) {
		let point = Geometry::Point(PointGeometry::new(coordinate));
		let decoded = from_wkb(to_wkb(&point).unwrap().as_slice(), None).unwrap();
		assert_eq!(decoded, point);
		assert_eq!(decoded.dimensions(), dimensions);
	}

	#[test]
	fn decode_attaches_srid_to_the_top_level_only() {
		let multi = Geometry::MultiLineString(MultiLineStringGeometry::from(&[
			[[0, 0], [1, 1]],
			[[2, 2], [3, 3]],
		]));
		let wkb = to_wkb(&multi).unwrap();
		let decoded = from_wkb(wkb.as_slice(), Some(4326)).unwrap();
		assert_eq!(decoded.srid(), Some(4326));
		let Geometry::MultiLineString(lines) = decoded else {
			panic!("expected a multi line string");
		};
		assert_eq!(lines.lines[0].srid, None);
	}

	#[test]
	fn single_ring_polygon_roundtrips_as_polygon() {
		let triangle = Geometry::Polygon(PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1]]]));
		let decoded = from_wkb(to_wkb(&triangle).unwrap().as_slice(), None).unwrap();
		assert_eq!(decoded, triangle);
	}

	#[test]
	fn two_ring_polygon_comes_back_as_multi_polygon() {
		// The wire-shape rule: more than one input ring always produces a
		// MultiPolygon frame, even for a single logical polygon.
		let polygon = Geometry::Polygon(PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10]],
			[[2, 2], [2, 4], [4, 4], [4, 2]],
		]));
		let decoded = from_wkb(to_wkb(&polygon).unwrap().as_slice(), None).unwrap();

		let Geometry::MultiPolygon(multi) = decoded else {
			panic!("expected a multi polygon");
		};
		assert_eq!(multi.polygons.len(), 1);
		assert_eq!(multi.polygons[0].rings.len(), 2);
		let Geometry::Polygon(input) = polygon else {
			unreachable!();
		};
		assert_eq!(multi.polygons[0].rings, input.rings);
	}

	#[test]
	fn multi_polygon_with_correct_windings_roundtrips() {
		let c = |x, y| Coordinate::new(x, y);
		let multi = Geometry::MultiPolygon(MultiPolygonGeometry {
			polygons: vec![PolygonGeometry {
				rings: vec![
					RingGeometry(vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)]),
					RingGeometry(vec![c(2.0, 2.0), c(2.0, 4.0), c(4.0, 4.0), c(4.0, 2.0), c(2.0, 2.0)]),
				],
				srid: None,
			}],
			srid: None,
		});
		let decoded = from_wkb(to_wkb(&multi).unwrap().as_slice(), None).unwrap();
		assert_eq!(decoded, multi);
	}

	#[test]
	fn write_reports_the_byte_count_and_fills_the_sink() {
		let point = Geometry::Point(PointGeometry::new(Coordinate::new(12.0, 34.0)));
		let converter = WkbConverter::default();
		let mut sink: Vec<u8> = Vec::new();
		let written = converter.write(&point, &mut sink).unwrap();
		assert_eq!(written, 21);
		assert_eq!(Blob::from(sink.clone()), converter.encode(&point).unwrap());
	}

	#[test]
	fn write_leaves_the_sink_untouched_on_failure() {
		// Two clockwise rings cannot be grouped, so encoding fails.
		let polygon = Geometry::Polygon(PolygonGeometry::from(&[
			[[0, 10], [10, 10], [10, 0], [0, 0]],
			[[2, 4], [4, 4], [4, 2], [2, 2]],
		]));
		let mut sink: Vec<u8> = Vec::new();
		assert!(WkbConverter::default().write(&polygon, &mut sink).is_err());
		assert!(sink.is_empty());
	}

	#[test]
	fn read_consumes_a_stream() {
		let point = Geometry::Point(PointGeometry::new(Coordinate::new(1.0, 2.0)));
		let wkb = to_wkb(&point).unwrap();
		let mut source = std::io::Cursor::new(wkb.into_vec());
		let decoded = WkbConverter::default().read(&mut source, Some(3857)).unwrap();
		assert_eq!(decoded.srid(), Some(3857));
	}

	#[test]
	fn empty_line_string_roundtrips() {
		let line = Geometry::LineString(LineStringGeometry {
			coordinates: vec![],
			srid: None,
		});
		let decoded = from_wkb(to_wkb(&line).unwrap().as_slice(), None).unwrap();
		assert_eq!(decoded, line);
	}

	#[test]
	fn empty_multi_point_roundtrips() {
		let multi = Geometry::MultiPoint(MultiPointGeometry {
			points: vec![],
			srid: None,
		});
		let decoded = from_wkb(to_wkb(&multi).unwrap().as_slice(), None).unwrap();
		assert_eq!(decoded, multi);
	}
}
