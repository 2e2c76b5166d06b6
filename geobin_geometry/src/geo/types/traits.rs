use super::Dimensions;
use anyhow::Result;
use std::fmt::Debug;

/// Defines the basic interface shared by all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the Z/M presence flags of the geometry, folded over all of
	/// its coordinates.
	fn dimensions(&self) -> Dimensions;

	/// Verifies the structural validity of the geometry, e.g. minimum point
	/// counts or ring closure.
	///
	/// This is a caller-facing check; the WKB codec never calls it and
	/// serializes whatever the caller's data contains.
	fn verify(&self) -> Result<()>;
}

/// Represents composite geometries that are collections of simpler elements,
/// e.g. a polygon is made of rings and a line string is made of coordinates.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over owned elements of the composite geometry.
	fn into_iter(self) -> impl Iterator<Item = Item>
	where
		Self: Sized,
	{
		self.into_inner().into_iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
