use super::types::*;
use crate::wkb::WkbError;
use anyhow::Result;
use std::fmt::Debug;

/// An in-memory geometry value, one of the six kinds the WKB codec supports.
///
/// `GeometryCollection` is deliberately absent; it is rejected on both
/// encode and decode.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Returns the Z/M presence flags, folded over all coordinates.
	pub fn dimensions(&self) -> Dimensions {
		match self {
			Geometry::Point(g) => g.dimensions(),
			Geometry::LineString(g) => g.dimensions(),
			Geometry::Polygon(g) => g.dimensions(),
			Geometry::MultiPoint(g) => g.dimensions(),
			Geometry::MultiLineString(g) => g.dimensions(),
			Geometry::MultiPolygon(g) => g.dimensions(),
		}
	}

	/// Verifies the structural validity of the geometry.
	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	/// Returns the spatial reference identifier, if one is attached.
	pub fn srid(&self) -> Option<Srid> {
		match self {
			Geometry::Point(g) => g.srid,
			Geometry::LineString(g) => g.srid,
			Geometry::Polygon(g) => g.srid,
			Geometry::MultiPoint(g) => g.srid,
			Geometry::MultiLineString(g) => g.srid,
			Geometry::MultiPolygon(g) => g.srid,
		}
	}

	/// Attaches a spatial reference identifier to the top-level geometry.
	pub fn set_srid(&mut self, srid: Option<Srid>) {
		match self {
			Geometry::Point(g) => g.srid = srid,
			Geometry::LineString(g) => g.srid = srid,
			Geometry::Polygon(g) => g.srid = srid,
			Geometry::MultiPoint(g) => g.srid = srid,
			Geometry::MultiLineString(g) => g.srid = srid,
			Geometry::MultiPolygon(g) => g.srid = srid,
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<PointGeometry> for Geometry {
	fn from(value: PointGeometry) -> Self {
		Geometry::Point(value)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(value: LineStringGeometry) -> Self {
		Geometry::LineString(value)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(value: PolygonGeometry) -> Self {
		Geometry::Polygon(value)
	}
}

impl From<MultiPointGeometry> for Geometry {
	fn from(value: MultiPointGeometry) -> Self {
		Geometry::MultiPoint(value)
	}
}

impl From<MultiLineStringGeometry> for Geometry {
	fn from(value: MultiLineStringGeometry) -> Self {
		Geometry::MultiLineString(value)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(value: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(value)
	}
}

/// Converts a `geo` geometry into the WKB model.
///
/// Fails with [`WkbError::UnsupportedGeometry`] for the shapes the writer
/// cannot represent: collections, lines, rects and triangles.
impl TryFrom<geo::Geometry<f64>> for Geometry {
	type Error = WkbError;

	fn try_from(value: geo::Geometry<f64>) -> Result<Self, WkbError> {
		match value {
			geo::Geometry::Point(g) => Ok(Geometry::Point(PointGeometry::from(g))),
			geo::Geometry::LineString(g) => Ok(Geometry::LineString(LineStringGeometry::from(g))),
			geo::Geometry::Polygon(g) => Ok(Geometry::Polygon(PolygonGeometry::from(g))),
			geo::Geometry::MultiPoint(g) => Ok(Geometry::MultiPoint(MultiPointGeometry::from(g))),
			geo::Geometry::MultiLineString(g) => Ok(Geometry::MultiLineString(MultiLineStringGeometry::from(g))),
			geo::Geometry::MultiPolygon(g) => Ok(Geometry::MultiPolygon(MultiPolygonGeometry::from(g))),
			geo::Geometry::GeometryCollection(_) => Err(WkbError::UnsupportedGeometry("GeometryCollection".to_string())),
			geo::Geometry::Line(_) => Err(WkbError::UnsupportedGeometry("Line".to_string())),
			geo::Geometry::Rect(_) => Err(WkbError::UnsupportedGeometry("Rect".to_string())),
			geo::Geometry::Triangle(_) => Err(WkbError::UnsupportedGeometry("Triangle".to_string())),
		}
	}
}
