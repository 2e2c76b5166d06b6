//! Computational geometry helpers for ring orientation and shell/hole
//! grouping.

mod winding;

pub use winding::*;
