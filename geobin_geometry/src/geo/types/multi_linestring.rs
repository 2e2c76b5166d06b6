use super::{CompositeGeometryTrait, Dimensions, GeometryTrait, LineStringGeometry, Srid};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered collection of line strings.
///
/// The WKB writer emits a collection with exactly one part as a plain
/// `LineString`; anything else becomes a `MultiLineString`.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry {
	pub lines: Vec<LineStringGeometry>,
	pub srid: Option<Srid>,
}

impl GeometryTrait for MultiLineStringGeometry {
	fn dimensions(&self) -> Dimensions {
		self
			.lines
			.iter()
			.fold(Dimensions::XY, |dimensions, line| dimensions.union(line.dimensions()))
	}

	fn verify(&self) -> Result<()> {
		for line in &self.lines {
			line.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self {
			lines: Vec::new(),
			srid: None,
		}
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.lines
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.lines
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.lines
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.lines).finish()
	}
}

crate::impl_from_parts!(MultiLineStringGeometry, lines, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry {
			lines: geometry.into_iter().map(LineStringGeometry::from).collect(),
			srid: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Coordinate;

	#[test]
	fn dimensions_fold_over_lines() {
		let multi = MultiLineStringGeometry {
			lines: vec![
				LineStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0]]),
				LineStringGeometry {
					coordinates: vec![Coordinate::with_z(0.0, 0.0, 1.0)],
					srid: None,
				},
			],
			srid: None,
		};
		assert_eq!(multi.dimensions(), Dimensions::new(true, false));
	}

	#[test]
	fn verify_checks_every_line() {
		let valid = MultiLineStringGeometry::from(&[[[0, 0], [1, 1]], [[2, 2], [3, 3]]]);
		assert!(valid.verify().is_ok());

		let invalid = MultiLineStringGeometry::from(&[[[0, 0]]]);
		assert!(invalid.verify().is_err());
	}

	#[test]
	fn from_geo_multi_line_string() {
		let mls = geo::MultiLineString::new(vec![geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)])]);
		let multi = MultiLineStringGeometry::from(mls);
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.lines[0].len(), 2);
	}
}
