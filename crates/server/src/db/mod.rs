//! Listing storage.
//!
//! # Store
//!
//! Listings live in memory for the lifetime of the process. Callers go
//! through the [`PropertyRepository`] trait so a durable backend can replace
//! [`InMemoryPropertyRepository`] without touching the routes.
//!
//! # Seeding
//!
//! [`seed::load`] inserts the mock listings at startup unless
//! `HOMESTEAD_SEED=false`.

pub mod properties;
pub mod seed;

use thiserror::Error;

use homestead_core::ValidationError;

pub use properties::{InMemoryPropertyRepository, PropertyRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The create payload failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Every ID the counter can hand out has been used.
    #[error("property IDs exhausted")]
    IdsExhausted,
}
