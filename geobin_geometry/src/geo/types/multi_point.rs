use super::{CompositeGeometryTrait, Coordinate, Dimensions, GeometryTrait, Srid};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered collection of points.
///
/// The order carries no meaning but is preserved through encoding and
/// decoding.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	pub points: Vec<Coordinate>,
	pub srid: Option<Srid>,
}

impl GeometryTrait for MultiPointGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.points
			.iter()
			.fold(Dimensions::XY, |dimensions, c| dimensions.union(c.dimensions()))
	}

	/// A collection of points is always valid.
	fn verify(&self) -> Result<()> {
		Ok(())
	}
}

impl CompositeGeometryTrait<Coordinate> for MultiPointGeometry {
	fn new() -> Self {
		Self {
			points: Vec::new(),
			srid: None,
		}
	}
	fn as_vec(&self) -> &Vec<Coordinate> {
		&self.points
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinate> {
		&mut self.points
	}
	fn into_inner(self) -> Vec<Coordinate> {
		self.points
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}

crate::impl_from_parts!(MultiPointGeometry, points, Coordinate);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry {
			points: geometry.into_iter().map(Coordinate::from).collect(),
			srid: None,
		}
	}
}
