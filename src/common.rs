//! Defines some common functions used in this library.

/// Pre-condition checks on raw rows.
pub(crate) mod checker;
