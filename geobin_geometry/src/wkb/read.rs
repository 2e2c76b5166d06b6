use super::{WkbByteOrder, WkbError, WkbShape, WkbTypeCode};
use crate::geo::{
	Coordinate, Dimensions, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry, Srid,
};
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use geobin_core::io::{ValueReader, ValueReaderSlice};

/// Decodes a WKB byte buffer into a geometry.
///
/// The byte order is taken from the leading marker byte; if `srid` is given
/// it is attached to the returned top-level geometry. WKB in this profile
/// carries no embedded SRID.
pub(super) fn decode_geometry(bytes: &[u8], srid: Option<Srid>) -> Result<Geometry> {
	let (marker, body) = bytes.split_first().ok_or(WkbError::TruncatedInput)?;
	let byte_order = WkbByteOrder::from_marker(*marker)?;

	let mut geometry = match byte_order {
		WkbByteOrder::Ndr => GeometryDecoder::<LittleEndian>::new(body).decode()?,
		WkbByteOrder::Xdr => GeometryDecoder::<BigEndian>::new(body).decode()?,
	};

	geometry.set_srid(srid);
	Ok(geometry)
}

struct GeometryDecoder<'a, E: ByteOrder> {
	reader: ValueReaderSlice<'a, E>,
}

impl<'a, E: ByteOrder> GeometryDecoder<'a, E> {
	fn new(body: &'a [u8]) -> Self {
		Self {
			reader: ValueReaderSlice::new(body),
		}
	}

	fn decode(mut self) -> Result<Geometry> {
		let type_code = WkbTypeCode::from_code(self.read_u32()?)?;
		let dimensions = type_code.dimensions;

		let geometry = match type_code.shape {
			WkbShape::Point => Geometry::Point(PointGeometry::new(self.read_coordinate(dimensions)?)),
			WkbShape::LineString => Geometry::LineString(LineStringGeometry {
				coordinates: self.read_coordinate_sequence(dimensions)?,
				srid: None,
			}),
			WkbShape::Polygon => Geometry::Polygon(self.read_polygon(dimensions)?),
			WkbShape::MultiPoint => {
				let count = self.read_u32()?;
				let mut points = Vec::new();
				for _ in 0..count {
					self.skip_sub_header()?;
					points.push(self.read_coordinate(dimensions)?);
				}
				Geometry::MultiPoint(MultiPointGeometry { points, srid: None })
			}
			WkbShape::MultiLineString => {
				let count = self.read_u32()?;
				let mut lines = Vec::new();
				for _ in 0..count {
					self.skip_sub_header()?;
					lines.push(LineStringGeometry {
						coordinates: self.read_coordinate_sequence(dimensions)?,
						srid: None,
					});
				}
				Geometry::MultiLineString(MultiLineStringGeometry { lines, srid: None })
			}
			WkbShape::MultiPolygon => {
				let count = self.read_u32()?;
				let mut polygons = Vec::new();
				for _ in 0..count {
					self.skip_sub_header()?;
					polygons.push(self.read_polygon(dimensions)?);
				}
				Geometry::MultiPolygon(MultiPolygonGeometry { polygons, srid: None })
			}
		};

		Ok(geometry)
	}

	// Every read in this decoder has a fixed size, so the only way a read
	// can fail is running off the end of the buffer.

	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.reader.read_u32().map_err(|_| WkbError::TruncatedInput)?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.reader.read_f64().map_err(|_| WkbError::TruncatedInput)?)
	}

	/// Skips the order byte and type code of a sub-geometry.
	///
	/// The sub-header is assumed to match the outer header in kind and
	/// dimensionality and is not re-validated; changing this would change
	/// which byte streams are accepted.
	fn skip_sub_header(&mut self) -> Result<()> {
		Ok(self.reader.skip(5).map_err(|_| WkbError::TruncatedInput)?)
	}

	fn read_coordinate(&mut self, dimensions: Dimensions) -> Result<Coordinate> {
		let x = self.read_f64()?;
		let y = self.read_f64()?;
		let z = if dimensions.has_z { Some(self.read_f64()?) } else { None };
		let m = if dimensions.has_m { Some(self.read_f64()?) } else { None };
		Ok(Coordinate { x, y, z, m })
	}

	fn read_coordinate_sequence(&mut self, dimensions: Dimensions) -> Result<Vec<Coordinate>> {
		let count = self.read_u32()?;
		let mut coordinates = Vec::new();
		for _ in 0..count {
			coordinates.push(self.read_coordinate(dimensions)?);
		}
		Ok(coordinates)
	}

	/// Reads a ring count followed by that many rings; the first ring is the
	/// shell, the remainder are holes.
	fn read_polygon(&mut self, dimensions: Dimensions) -> Result<PolygonGeometry> {
		let ring_count = self.read_u32()?;
		let mut rings = Vec::new();
		for _ in 0..ring_count {
			rings.push(RingGeometry(self.read_coordinate_sequence(dimensions)?));
		}
		Ok(PolygonGeometry { rings, srid: None })
	}
}
