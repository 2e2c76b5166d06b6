//! This module defines the [`ValueWriter`] trait for writing primitive values
//! to a binary sink.
//!
//! # Overview
//!
//! The trait mirrors [`super::ValueReader`]: fixed-size writes (unsigned
//! bytes and 32-bit integers, 64-bit floats) with the byte order selected by
//! the `E: ByteOrder` type parameter, plus raw slice and [`Blob`] writes.
//! Implementations supply the underlying writer; everything else is provided.

use crate::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// A trait for writing binary values to a sink with a fixed byte order.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	fn position(&mut self) -> Result<u64>;

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned 8-bit integer.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	/// Writes an unsigned 32-bit integer in the writer's byte order.
	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	/// Writes a 64-bit floating point number in the writer's byte order.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	/// Writes a slice of bytes.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	/// Writes the contents of a [`Blob`].
	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}
}
