use thiserror::Error;

/// All the ways WKB encoding or decoding can fail.
///
/// Every failure is terminal for the call that raised it: no retries and no
/// partial results. The codec raises these through [`anyhow::Error`], so
/// callers match on a variant with
/// [`downcast_ref`](anyhow::Error::downcast_ref).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WkbError {
	/// The leading byte order marker is neither XDR (0) nor NDR (1).
	#[error("byte order marker {0} is not recognized")]
	InvalidByteOrder(u8),

	/// The wire type code is unknown, or names an explicitly excluded type
	/// such as GeometryCollection.
	#[error("geometry type '{0}' is not supported")]
	UnsupportedGeometryType(String),

	/// An in-memory shape the writer cannot represent.
	#[error("geometry '{0}' cannot be represented as well-known binary")]
	UnsupportedGeometry(String),

	/// A ring structure that cannot be grouped into shells and holes.
	#[error("invalid geometry: {0}")]
	InvalidGeometry(String),

	/// The input ended before the encoded geometry was complete.
	#[error("truncated input: the stream ended before the geometry was complete")]
	TruncatedInput,
}
