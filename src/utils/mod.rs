//! Utilities: file helpers.

pub mod persistence;
