//! This module defines the [`ValueReader`] trait for reading primitive values
//! from a binary source.
//!
//! # Overview
//!
//! The trait provides fixed-size reads (unsigned bytes and 32-bit integers,
//! 64-bit floats) with the byte order selected by the `E: ByteOrder` type
//! parameter, plus cursor management: position, remaining length, and
//! skipping over bytes without interpreting them. Implementations supply the
//! underlying reader; everything else is provided.

use anyhow::{Result, bail};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`.
pub trait SeekRead: Seek + Read {}

/// A trait for reading binary values from a source with a fixed byte order.
pub trait ValueReader<E: ByteOrder> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	///
	/// A position equal to the length is valid and means the reader is
	/// exhausted.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Advances the read position by `length` bytes without interpreting them.
	fn skip(&mut self, length: u64) -> Result<()> {
		if length > self.remaining() {
			bail!("cannot skip {length} bytes, only {} remaining", self.remaining());
		}
		let position = self.position() + length;
		self.set_position(position)
	}

	/// Reads an unsigned 8-bit integer.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads an unsigned 32-bit integer in the reader's byte order.
	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	/// Reads a 64-bit floating point number in the reader's byte order.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;

	#[test]
	fn test_read_u8() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0xFF]);
		assert_eq!(reader.read_u8()?, 0x01);
		assert_eq!(reader.read_u8()?, 0xFF);
		Ok(())
	}

	#[test]
	fn test_read_u32_le() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x00, 0x00, 0x00]);
		assert_eq!(reader.read_u32()?, 1);
		Ok(())
	}

	#[test]
	fn test_read_u32_be() -> Result<()> {
		let mut reader = ValueReaderSlice::new_be(&[0x00, 0x00, 0x00, 0x01]);
		assert_eq!(reader.read_u32()?, 1);
		Ok(())
	}

	#[test]
	fn test_read_f64_le() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]); // 1.0 in f64
		assert_eq!(reader.read_f64()?, 1.0);
		Ok(())
	}

	#[test]
	fn test_read_f64_be() -> Result<()> {
		let mut reader = ValueReaderSlice::new_be(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0]); // 1.0 in f64
		assert_eq!(reader.read_f64()?, 1.0);
		Ok(())
	}

	#[test]
	fn test_read_past_end_fails() {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x02]);
		assert!(reader.read_u32().is_err());
	}

	#[test]
	fn test_remaining_and_skip() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0u8; 8]);
		assert_eq!(reader.remaining(), 8);
		reader.skip(5)?;
		assert_eq!(reader.remaining(), 3);
		assert!(reader.has_remaining());
		reader.skip(3)?;
		assert!(!reader.has_remaining());
		assert!(reader.skip(1).is_err());
		Ok(())
	}

	#[test]
	fn test_is_empty() {
		assert!(ValueReaderSlice::new_le(&[]).is_empty());
		assert!(!ValueReaderSlice::new_le(&[0]).is_empty());
	}
}
