use super::{CompositeGeometryTrait, Dimensions, GeometryTrait, PolygonGeometry, Srid};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered collection of polygons, each with a shell and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	pub polygons: Vec<PolygonGeometry>,
	pub srid: Option<Srid>,
}

impl GeometryTrait for MultiPolygonGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.polygons
			.iter()
			.fold(Dimensions::XY, |dimensions, polygon| {
				dimensions.union(polygon.dimensions())
			})
	}

	fn verify(&self) -> Result<()> {
		for polygon in &self.polygons {
			polygon.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self {
			polygons: Vec::new(),
			srid: None,
		}
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.polygons
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.polygons
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.polygons
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}

crate::impl_from_parts!(MultiPolygonGeometry, polygons, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry {
			polygons: geometry.into_iter().map(PolygonGeometry::from).collect(),
			srid: None,
		}
	}
}
