// Conversion boilerplate for the geometry types.
//
// `impl_from_array` serves tuple-struct geometries (rings), while
// `impl_from_parts` serves the named-field geometries that also carry an
// optional SRID; conversions always start without one.

#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(|v| <$i>::from(v)).collect())
			}
		}
	)*}
}

#[macro_export]
macro_rules! impl_from_parts {
	($($t:ty,$field:ident,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self {
					$field: value.into_iter().map(<$i>::from).collect(),
					srid: None,
				}
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self {
					$field: value.iter().map(<$i>::from).collect(),
					srid: None,
				}
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self {
					$field: value.iter().map(|v| <$i>::from(v)).collect(),
					srid: None,
				}
			}
		}
	)*}
}
