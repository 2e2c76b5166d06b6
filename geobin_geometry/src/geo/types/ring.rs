use super::{CompositeGeometryTrait, Coordinate, Dimensions, GeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A series of coordinates used as a polygon boundary.
///
/// Rings are not automatically closed; whether the first point is repeated
/// at the end is decided by the caller's data.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinate>);

impl RingGeometry {
	/// Checks if a point is inside this ring, using an even-odd ray cast.
	///
	/// Rings with fewer than 4 points contain nothing. Points exactly on the
	/// boundary may return either value.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 4 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let xi = coords[i].x;
			let yi = coords[i].y;
			let xj = coords[j].x;
			let yj = coords[j].y;

			// Check if point is on the same side and crosses the ray
			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	/// Checks if every vertex of `other` lies inside this ring.
	#[must_use]
	pub fn contains_ring(&self, other: &RingGeometry) -> bool {
		!other.0.is_empty() && other.0.iter().all(|c| self.contains_point(c.x, c.y))
	}
}

impl GeometryTrait for RingGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.0
			.iter()
			.fold(Dimensions::XY, |dimensions, c| dimensions.union(c.dimensions()))
	}

	/// Verifies that the ring has at least 4 coordinates and is closed.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}
}

impl CompositeGeometryTrait<Coordinate> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinate> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinate> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinate> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinate);

/// Converts a `geo::LineString<f64>` into a ring, preserving coordinate order.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinate::from).collect())
	}
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	// ── contains_point ──────────────────────────────────────────────────

	#[test]
	fn contains_point_inside() {
		let ring = square();
		assert!(ring.contains_point(5.0, 5.0));
		assert!(ring.contains_point(1.0, 1.0));
		assert!(ring.contains_point(9.0, 9.0));
	}

	#[test]
	fn contains_point_outside() {
		let ring = square();
		assert!(!ring.contains_point(-1.0, 5.0));
		assert!(!ring.contains_point(11.0, 5.0));
		assert!(!ring.contains_point(5.0, -1.0));
		assert!(!ring.contains_point(5.0, 11.0));
	}

	#[test]
	fn contains_point_unclosed_ring() {
		// The ray cast closes the loop implicitly.
		let ring = RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10]]);
		assert!(ring.contains_point(5.0, 5.0));
		assert!(!ring.contains_point(15.0, 5.0));
	}

	#[test]
	fn contains_point_small_ring() {
		assert!(!RingGeometry::new().contains_point(0.0, 0.0));
		let triangle = RingGeometry::from(&[[0, 0], [10, 0], [5, 10]]);
		assert!(!triangle.contains_point(5.0, 1.0));
	}

	// ── contains_ring ───────────────────────────────────────────────────

	#[test]
	fn contains_ring_inside() {
		let inner = RingGeometry::from(&[[2, 2], [2, 4], [4, 4], [4, 2]]);
		assert!(square().contains_ring(&inner));
	}

	#[test]
	fn contains_ring_outside() {
		let other = RingGeometry::from(&[[20, 20], [20, 40], [40, 40], [40, 20]]);
		assert!(!square().contains_ring(&other));
	}

	#[test]
	fn contains_ring_partial_overlap() {
		let other = RingGeometry::from(&[[5, 5], [5, 15], [15, 15], [15, 5]]);
		assert!(!square().contains_ring(&other));
	}

	#[test]
	fn contains_ring_empty() {
		assert!(!square().contains_ring(&RingGeometry::new()));
	}

	// ── dimensions ──────────────────────────────────────────────────────

	#[test]
	fn dimensions_fold_over_coordinates() {
		assert_eq!(square().dimensions(), Dimensions::XY);
		let ring = RingGeometry(vec![
			Coordinate::new(0.0, 0.0),
			Coordinate::with_z(1.0, 0.0, 5.0),
			Coordinate::with_m(1.0, 1.0, 7.0),
		]);
		assert_eq!(ring.dimensions(), Dimensions::new(true, true));
	}

	// ── verify ──────────────────────────────────────────────────────────

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn verify_not_closed() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		assert!(ring.verify().is_err());
	}

	// ── CompositeGeometryTrait ──────────────────────────────────────────

	#[test]
	fn composite_push_and_len() {
		let mut ring = RingGeometry::new();
		assert!(ring.is_empty());
		ring.push(Coordinate::new(1.0, 2.0));
		ring.push(Coordinate::new(3.0, 4.0));
		assert_eq!(ring.len(), 2);
		assert_eq!(ring.first().unwrap().x, 1.0);
		assert_eq!(ring.last().unwrap().x, 3.0);
	}

	// ── From conversions ────────────────────────────────────────────────

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![
			geo::Coord { x: 0.0, y: 0.0 },
			geo::Coord { x: 1.0, y: 1.0 },
		]);
		let ring = RingGeometry::from(ls);
		assert_eq!(ring.len(), 2);
	}

	#[test]
	fn debug_format() {
		let ring = RingGeometry::from(&[[1, 2], [3, 4]]);
		assert!(format!("{ring:?}").contains("[1.0, 2.0]"));
	}
}
