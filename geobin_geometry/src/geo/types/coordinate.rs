use std::fmt::Debug;

/// Identifier of a spatial reference system.
///
/// SRIDs are attached to decoded geometries out-of-band; the WKB payload in
/// this profile never carries one.
pub type Srid = i32;

/// Z/M presence flags, shared by every coordinate of one geometry.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
	pub has_z: bool,
	pub has_m: bool,
}

impl Dimensions {
	/// Plain two-dimensional coordinates, no Z and no M.
	pub const XY: Dimensions = Dimensions {
		has_z: false,
		has_m: false,
	};

	#[must_use]
	pub fn new(has_z: bool, has_m: bool) -> Self {
		Dimensions { has_z, has_m }
	}

	/// Combines the flags of two parts of one geometry.
	#[must_use]
	pub fn union(self, other: Self) -> Self {
		Dimensions {
			has_z: self.has_z || other.has_z,
			has_m: self.has_m || other.has_m,
		}
	}
}

impl Debug for Dimensions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"XY{}{}",
			if self.has_z { "Z" } else { "" },
			if self.has_m { "M" } else { "" }
		)
	}
}

/// A single position with mandatory X/Y and optional Z (elevation) and M
/// (measure) values.
///
/// Z and M use a true presence/absence distinction, so "no Z" is never
/// confused with "Z is NaN".
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
	pub x: f64,
	pub y: f64,
	pub z: Option<f64>,
	pub m: Option<f64>,
}

impl Coordinate {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Coordinate { x, y, z: None, m: None }
	}

	#[must_use]
	pub fn with_z(x: f64, y: f64, z: f64) -> Self {
		Coordinate {
			x,
			y,
			z: Some(z),
			m: None,
		}
	}

	#[must_use]
	pub fn with_m(x: f64, y: f64, m: f64) -> Self {
		Coordinate {
			x,
			y,
			z: None,
			m: Some(m),
		}
	}

	#[must_use]
	pub fn with_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Coordinate {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	/// Returns which optional values this coordinate carries.
	#[must_use]
	pub fn dimensions(&self) -> Dimensions {
		Dimensions::new(self.z.is_some(), self.m.is_some())
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinate
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinate::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinate {
	fn from(value: [f64; 2]) -> Self {
		Coordinate::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for Coordinate {
	fn from(value: (f64, f64)) -> Self {
		Coordinate::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Coordinate {
	fn from(value: geo::Coord) -> Self {
		Coordinate::new(value.x, value.y)
	}
}

impl From<geo::Point> for Coordinate {
	fn from(value: geo::Point) -> Self {
		Coordinate::new(value.x(), value.y())
	}
}

impl Debug for Coordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{:?}, {:?}", self.x, self.y)?;
		if let Some(z) = self.z {
			write!(f, ", {z:?}")?;
		}
		if let Some(m) = self.m {
			write!(f, ", m={m:?}")?;
		}
		write!(f, "]")
	}
}
