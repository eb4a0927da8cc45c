//! Homestead Core - Shared listing types and client-side logic.
//!
//! This crate provides the pieces shared by every Homestead component:
//! - `server` - HTTP API serving the listing store
//! - `cli` - Command-line client for browsing, filtering and favoriting
//!
//! # Architecture
//!
//! The core crate contains types, pure functions and traits. It performs no
//! network or file I/O; persistence is reached through the [`KeyValueStore`]
//! trait so callers pick the backend.
//!
//! # Modules
//!
//! - [`types`] - Listing records, IDs, prices and validation
//! - [`filter`] - Narrowing a listing sequence by search criteria
//! - [`favorites`] - Persisted set of favorited listings
//! - [`map`] - Map markers and viewport for the mapping provider
//! - [`share`] - Share text for a listing
//! - [`identity`] - Seam for the external identity provider

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod favorites;
pub mod filter;
pub mod identity;
pub mod map;
pub mod share;
pub mod types;

pub use favorites::{FAVORITES_KEY, Favorites, KeyValueStore, MemoryKeyValueStore, StoreError};
pub use filter::{FilterCriteria, ListingType, filter_properties};
pub use types::*;
