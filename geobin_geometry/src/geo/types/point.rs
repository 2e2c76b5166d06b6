use super::{Coordinate, Dimensions, GeometryTrait, Srid};
use anyhow::Result;
use std::fmt::Debug;

/// A single position.
///
/// This is the simplest geometry and the building block for all others.
#[derive(Clone, PartialEq)]
pub struct PointGeometry {
	pub coordinate: Coordinate,
	pub srid: Option<Srid>,
}

impl PointGeometry {
	/// Constructs a new `PointGeometry` without a spatial reference.
	#[must_use]
	pub fn new(coordinate: Coordinate) -> Self {
		Self {
			coordinate,
			srid: None,
		}
	}

	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.coordinate.x
	}

	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.coordinate.y
	}
}

impl GeometryTrait for PointGeometry {
	fn dimensions(&self) -> Dimensions {
		self.coordinate.dimensions()
	}

	/// A point is always valid.
	fn verify(&self) -> Result<()> {
		Ok(())
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.coordinate.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinate: From<T>,
{
	fn from(value: T) -> Self {
		Self::new(Coordinate::from(value))
	}
}
