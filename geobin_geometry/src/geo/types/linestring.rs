use super::{CompositeGeometryTrait, Coordinate, Dimensions, GeometryTrait, Srid};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An open sequence of connected coordinates.
///
/// No implicit closing point is added; a line string is a ring only if the
/// caller's data repeats the first coordinate at the end.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry {
	pub coordinates: Vec<Coordinate>,
	pub srid: Option<Srid>,
}

impl GeometryTrait for LineStringGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.coordinates
			.iter()
			.fold(Dimensions::XY, |dimensions, c| dimensions.union(c.dimensions()))
	}

	/// Verifies that the line string has at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.coordinates.len() >= 2, "LineString must have at least two points");
		Ok(())
	}
}

impl CompositeGeometryTrait<Coordinate> for LineStringGeometry {
	fn new() -> Self {
		Self {
			coordinates: Vec::new(),
			srid: None,
		}
	}
	fn as_vec(&self) -> &Vec<Coordinate> {
		&self.coordinates
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinate> {
		&mut self.coordinates
	}
	fn into_inner(self) -> Vec<Coordinate> {
		self.coordinates
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.coordinates).finish()
	}
}

crate::impl_from_parts!(LineStringGeometry, coordinates, Coordinate);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry {
			coordinates: geometry.into_iter().map(Coordinate::from).collect(),
			srid: None,
		}
	}
}
