use super::{WkbByteOrder, WkbShape, WkbTypeCode};
use crate::geo::{Coordinate, Dimensions, Geometry, RingGeometry};
use crate::math::split_multi_polygon;
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use geobin_core::Blob;
use geobin_core::io::{ValueWriter, ValueWriterBlob};

/// Encodes a geometry into a WKB byte buffer.
///
/// Dimensionality is detected from the geometry itself; the caller only
/// chooses the byte order.
pub(super) fn encode_geometry(geometry: &Geometry, byte_order: WkbByteOrder) -> Result<Blob> {
	match byte_order {
		WkbByteOrder::Ndr => GeometryEncoder::<LittleEndian>::new(byte_order).encode(geometry),
		WkbByteOrder::Xdr => GeometryEncoder::<BigEndian>::new(byte_order).encode(geometry),
	}
}

struct GeometryEncoder<E: ByteOrder> {
	writer: ValueWriterBlob<E>,
	byte_order: WkbByteOrder,
}

impl<E: ByteOrder> GeometryEncoder<E> {
	fn new(byte_order: WkbByteOrder) -> Self {
		Self {
			writer: ValueWriterBlob::new(),
			byte_order,
		}
	}

	fn encode(mut self, geometry: &Geometry) -> Result<Blob> {
		let dimensions = geometry.dimensions();

		match geometry {
			Geometry::Point(point) => {
				self.write_header(WkbShape::Point, dimensions)?;
				self.write_coordinate(&point.coordinate, dimensions)?;
			}
			Geometry::MultiPoint(multi_point) => {
				self.write_header(WkbShape::MultiPoint, dimensions)?;
				self.writer.write_u32(multi_point.points.len() as u32)?;
				for coordinate in &multi_point.points {
					// Sub-headers carry the plain Point code, undecorated by
					// the Z/M flags of the outer header.
					self.write_header(WkbShape::Point, Dimensions::XY)?;
					self.write_coordinate(coordinate, dimensions)?;
				}
			}
			Geometry::LineString(line) => {
				self.write_header(WkbShape::LineString, dimensions)?;
				self.write_coordinate_sequence(&line.coordinates, dimensions)?;
			}
			Geometry::MultiLineString(multi_line) => {
				if multi_line.lines.len() == 1 {
					// A single part goes out as a plain LineString.
					self.write_header(WkbShape::LineString, dimensions)?;
					self.write_coordinate_sequence(&multi_line.lines[0].coordinates, dimensions)?;
				} else {
					self.write_header(WkbShape::MultiLineString, dimensions)?;
					self.writer.write_u32(multi_line.lines.len() as u32)?;
					for line in &multi_line.lines {
						self.write_header(WkbShape::LineString, Dimensions::XY)?;
						self.write_coordinate_sequence(&line.coordinates, dimensions)?;
					}
				}
			}
			Geometry::Polygon(polygon) => {
				self.encode_rings(&polygon.rings, dimensions)?;
			}
			Geometry::MultiPolygon(multi_polygon) => {
				// The polygon model is a flat ring list on the wire side;
				// existing grouping is discarded and rebuilt geometrically.
				let rings: Vec<RingGeometry> = multi_polygon
					.polygons
					.iter()
					.flat_map(|polygon| polygon.rings.iter().cloned())
					.collect();
				self.encode_rings(&rings, dimensions)?;
			}
		}

		Ok(self.writer.into_blob())
	}

	/// Writes a raw ring list as either a plain Polygon or a MultiPolygon.
	///
	/// Exactly one ring short-circuits to a Polygon with that ring as shell
	/// and no classification. Any other count runs the ring classifier and
	/// always produces a MultiPolygon frame, even when grouping yields a
	/// single polygon.
	fn encode_rings(&mut self, rings: &[RingGeometry], dimensions: Dimensions) -> Result<()> {
		if rings.len() == 1 {
			self.write_header(WkbShape::Polygon, dimensions)?;
			self.writer.write_u32(1)?;
			self.write_coordinate_sequence(&rings[0].0, dimensions)?;
		} else {
			let polygons = split_multi_polygon(rings)?;
			self.write_header(WkbShape::MultiPolygon, dimensions)?;
			self.writer.write_u32(polygons.len() as u32)?;
			for polygon in &polygons {
				self.write_header(WkbShape::Polygon, Dimensions::XY)?;
				self.writer.write_u32(polygon.rings.len() as u32)?;
				for ring in &polygon.rings {
					self.write_coordinate_sequence(&ring.0, dimensions)?;
				}
			}
		}
		Ok(())
	}

	fn write_header(&mut self, shape: WkbShape, dimensions: Dimensions) -> Result<()> {
		self.writer.write_u8(self.byte_order.marker())?;
		self.writer.write_u32(WkbTypeCode::new(shape, dimensions).code())?;
		Ok(())
	}

	fn write_coordinate(&mut self, coordinate: &Coordinate, dimensions: Dimensions) -> Result<()> {
		self.writer.write_f64(coordinate.x)?;
		self.writer.write_f64(coordinate.y)?;
		if dimensions.has_z {
			self.writer.write_f64(coordinate.z.unwrap_or(f64::NAN))?;
		}
		if dimensions.has_m {
			self.writer.write_f64(coordinate.m.unwrap_or(f64::NAN))?;
		}
		Ok(())
	}

	fn write_coordinate_sequence(&mut self, coordinates: &[Coordinate], dimensions: Dimensions) -> Result<()> {
		self.writer.write_u32(coordinates.len() as u32)?;
		for coordinate in coordinates {
			self.write_coordinate(coordinate, dimensions)?;
		}
		Ok(())
	}
}
