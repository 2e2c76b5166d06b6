use super::{CompositeGeometryTrait, Dimensions, GeometryTrait, RingGeometry, Srid};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A polygon as a flat, ordered list of rings.
///
/// When the polygon came off the wire, the first ring is the shell and the
/// remaining rings are holes. The WKB writer however treats the list as raw
/// whenever it holds more than one ring and reconstructs the shell/hole
/// structure from winding and containment alone.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	pub rings: Vec<RingGeometry>,
	pub srid: Option<Srid>,
}

impl PolygonGeometry {
	/// Returns the shell ring, by the first-ring-is-shell convention.
	#[must_use]
	pub fn shell(&self) -> Option<&RingGeometry> {
		self.rings.first()
	}

	/// Returns the hole rings, by the first-ring-is-shell convention.
	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		if self.rings.is_empty() { &[] } else { &self.rings[1..] }
	}
}

impl GeometryTrait for PolygonGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.rings
			.iter()
			.fold(Dimensions::XY, |dimensions, ring| dimensions.union(ring.dimensions()))
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.rings.is_empty(), "Polygon must have at least one ring");
		for ring in &self.rings {
			ring.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self {
			rings: Vec::new(),
			srid: None,
		}
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.rings
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.rings
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.rings
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}

crate::impl_from_parts!(PolygonGeometry, rings, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry { rings, srid: None }
	}
}
