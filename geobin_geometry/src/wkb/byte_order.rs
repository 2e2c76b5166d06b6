use super::WkbError;

/// Byte order of a WKB stream.
///
/// The wire marker is `0` for XDR (big-endian) and `1` for NDR
/// (little-endian); every multi-byte number that follows uses the marked
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WkbByteOrder {
	/// XDR (big-endian) encoding of numeric types.
	Xdr,
	/// NDR (little-endian) encoding of numeric types, the default.
	#[default]
	Ndr,
}

impl WkbByteOrder {
	/// Returns the wire marker byte of this byte order.
	#[must_use]
	pub fn marker(self) -> u8 {
		match self {
			WkbByteOrder::Xdr => 0,
			WkbByteOrder::Ndr => 1,
		}
	}

	/// Parses a wire marker byte.
	pub fn from_marker(byte: u8) -> Result<Self, WkbError> {
		match byte {
			0 => Ok(WkbByteOrder::Xdr),
			1 => Ok(WkbByteOrder::Ndr),
			other => Err(WkbError::InvalidByteOrder(other)),
		}
	}
}
