//! Core types for Homestead.
//!
//! Type-safe wrappers for listing identifiers and prices, plus the listing
//! records themselves.

pub mod id;
pub mod price;
pub mod property;

pub use id::PropertyId;
pub use price::Price;
pub use property::{NewProperty, Property, ValidProperty, ValidationError};
