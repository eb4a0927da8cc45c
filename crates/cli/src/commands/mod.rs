//! CLI command implementations.
//!
//! Each command writes its output to the supplied writer so it can be
//! captured in tests.

pub mod favorites;
pub mod listings;
