//! Line-level parsing utilities.
//!
//! The loader drives these; nothing here is part of the public API.

pub(crate) mod line;
