//! Byte-level plumbing for the geobin workspace.
//!
//! Contains the [`Blob`] byte buffer and the endianness-generic value
//! readers and writers that the WKB codec is built on.

pub mod io;
pub mod types;

pub use types::Blob;
