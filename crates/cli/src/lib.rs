//! Homestead CLI library.
//!
//! The API client, local favorites storage and command implementations,
//! exposed as a library so integration tests can drive them against a live
//! server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod commands;
pub mod error;
pub mod render;
pub mod store;

pub use client::{ApiClient, ClientError};
pub use error::CliError;
pub use store::JsonFileStore;
