//! Binary value readers and writers with configurable byte order.
//!
//! The [`ValueReader`] and [`ValueWriter`] traits expose the small set of
//! primitive reads and writes the WKB codec needs (bytes, 32-bit unsigned
//! integers, 64-bit floats), generic over [`byteorder::ByteOrder`] so the
//! same code path serves both NDR (little-endian) and XDR (big-endian)
//! streams. [`ValueReaderSlice`] reads from a borrowed byte slice with a
//! forward-only cursor; [`ValueWriterBlob`] appends to an in-memory
//! [`crate::Blob`].

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
