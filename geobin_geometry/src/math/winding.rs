use crate::geo::{PolygonGeometry, RingGeometry};
use crate::wkb::WkbError;
use anyhow::Result;

/// Determines ring orientation from the neighbors of the highest vertex.
///
/// Finds the vertex with the highest Y (first occurrence wins on ties) and
/// signs the cross product of (successor − apex) × (predecessor − apex):
/// positive means counter-clockwise. Exactly collinear neighbors fall back
/// to comparing X: counter-clockwise when the predecessor lies to the right
/// of the successor.
///
/// Rings with fewer than 4 points always return `false`; their orientation
/// is not reliable enough to classify.
#[must_use]
pub fn is_counter_clockwise(ring: &RingGeometry) -> bool {
	let vertices = &ring.0;
	if vertices.len() < 4 {
		return false;
	}

	let mut highest = 0;
	for (index, vertex) in vertices.iter().enumerate().skip(1) {
		if vertex.y > vertices[highest].y {
			highest = index;
		}
	}

	// Neighbor lookup assumes a closed ring: wrapping past either end skips
	// the duplicated closure point.
	let before = if highest == 0 { vertices.len() - 2 } else { highest - 1 };
	let after = if highest + 1 >= vertices.len() { 1 } else { highest + 1 };

	let apex = &vertices[highest];
	let prev = &vertices[before];
	let next = &vertices[after];

	// Centered on the apex to limit floating point error.
	let cross = (next.x - apex.x) * (prev.y - apex.y) - (next.y - apex.y) * (prev.x - apex.x);

	if cross == 0.0 {
		prev.x > next.x
	} else {
		cross > 0.0
	}
}

/// Groups a flat list of rings into polygons of one shell plus its holes.
///
/// Counter-clockwise rings become shells; every other ring is a hole and is
/// appended to the first shell that spatially contains it. A hole contained
/// by no shell fails the whole call with [`WkbError::InvalidGeometry`];
/// no partial grouping is ever returned.
pub fn split_multi_polygon(rings: &[RingGeometry]) -> Result<Vec<PolygonGeometry>> {
	let mut polygons: Vec<PolygonGeometry> = Vec::new();
	let mut holes: Vec<&RingGeometry> = Vec::new();

	for ring in rings {
		if is_counter_clockwise(ring) {
			polygons.push(PolygonGeometry {
				rings: vec![ring.clone()],
				srid: None,
			});
		} else {
			holes.push(ring);
		}
	}

	for hole in holes {
		let shell = polygons
			.iter_mut()
			.find(|polygon| polygon.rings[0].contains_ring(hole));
		match shell {
			Some(polygon) => polygon.rings.push(hole.clone()),
			None => {
				return Err(
					WkbError::InvalidGeometry(
						"a hole is contained in no shell; the ring windings are probably wrong".to_string(),
					)
					.into(),
				);
			}
		}
	}

	Ok(polygons)
}
