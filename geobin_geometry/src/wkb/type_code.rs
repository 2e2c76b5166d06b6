use super::WkbError;
use crate::geo::Dimensions;

/// The six geometry shapes this WKB profile can carry.
///
/// GeometryCollection is recognized on the wire but always rejected, so it
/// has no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WkbShape {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
}

impl WkbShape {
	/// Returns the OGC base code of this shape.
	#[must_use]
	pub fn base_code(self) -> u32 {
		match self {
			WkbShape::Point => 1,
			WkbShape::LineString => 2,
			WkbShape::Polygon => 3,
			WkbShape::MultiPoint => 4,
			WkbShape::MultiLineString => 5,
			WkbShape::MultiPolygon => 6,
		}
	}
}

/// A validated WKB type code: a shape plus its dimensionality flags.
///
/// Modeling codes as (shape, Z, M) tuples instead of raw integers makes
/// invalid codes unrepresentable; the base + 1000·Z + 2000·M arithmetic
/// stays inside [`code`](Self::code) and [`from_code`](Self::from_code).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WkbTypeCode {
	pub shape: WkbShape,
	pub dimensions: Dimensions,
}

impl WkbTypeCode {
	#[must_use]
	pub fn new(shape: WkbShape, dimensions: Dimensions) -> Self {
		WkbTypeCode { shape, dimensions }
	}

	/// Returns the numeric wire code.
	#[must_use]
	pub fn code(self) -> u32 {
		self.shape.base_code()
			+ if self.dimensions.has_z { 1000 } else { 0 }
			+ if self.dimensions.has_m { 2000 } else { 0 }
	}

	/// Parses a numeric wire code.
	///
	/// The GeometryCollection band (7, 1007, 2007, 3007) reports itself by
	/// name; every other unknown code is reported by number.
	pub fn from_code(code: u32) -> Result<Self, WkbError> {
		if code >= 4000 {
			return Err(WkbError::UnsupportedGeometryType(code.to_string()));
		}

		let has_m = code >= 2000;
		let has_z = (1000..2000).contains(&code) || code >= 3000;

		let shape = match code % 1000 {
			1 => WkbShape::Point,
			2 => WkbShape::LineString,
			3 => WkbShape::Polygon,
			4 => WkbShape::MultiPoint,
			5 => WkbShape::MultiLineString,
			6 => WkbShape::MultiPolygon,
			7 => return Err(WkbError::UnsupportedGeometryType("GeometryCollection".to_string())),
			_ => return Err(WkbError::UnsupportedGeometryType(code.to_string())),
		};

		Ok(WkbTypeCode::new(shape, Dimensions::new(has_z, has_m)))
	}
}
