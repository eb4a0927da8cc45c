//! Favorites commands.
//!
//! Favorites are stored locally and never sent to the listing service; only
//! `list --details` talks to the API, to show the favorited listings.

use std::io::Write;

use homestead_core::{Favorites, KeyValueStore, PropertyId};

use crate::client::{ApiClient, ClientError};
use crate::error::CliError;
use crate::render;

/// Print favorited IDs, one per line.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn list<S: KeyValueStore>(
    favorites: &Favorites<S>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if favorites.is_empty() {
        writeln!(out, "No favorites yet.")?;
        return Ok(());
    }
    for id in favorites.ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

/// Print a card for every favorited listing that still exists.
///
/// # Errors
///
/// Returns `CliError` if the service can't be reached or output fails.
pub async fn list_details<S: KeyValueStore + Sync>(
    client: &ApiClient,
    favorites: &Favorites<S>,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    if favorites.is_empty() {
        writeln!(out, "No favorites yet.")?;
        return Ok(());
    }

    for &id in favorites.ids() {
        match client.get_property(id).await {
            Ok(property) => writeln!(out, "{}\n", render::card(&property, true))?,
            Err(ClientError::NotFound(_)) => {
                tracing::debug!(property_id = %id, "Favorited listing no longer exists");
                writeln!(out, "★ #{id} (no longer listed)\n")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Add a listing to favorites.
///
/// # Errors
///
/// Returns `CliError` if persisting fails or output fails.
pub fn add<S: KeyValueStore>(
    favorites: &mut Favorites<S>,
    id: PropertyId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if favorites.add(id)? {
        writeln!(out, "Added #{id} to favorites.")?;
    } else {
        writeln!(out, "#{id} is already a favorite.")?;
    }
    Ok(())
}

/// Remove a listing from favorites.
///
/// # Errors
///
/// Returns `CliError` if persisting fails or output fails.
pub fn remove<S: KeyValueStore>(
    favorites: &mut Favorites<S>,
    id: PropertyId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if favorites.remove(id)? {
        writeln!(out, "Removed #{id} from favorites.")?;
    } else {
        writeln!(out, "#{id} was not a favorite.")?;
    }
    Ok(())
}

/// Flip a listing's favorite status.
///
/// # Errors
///
/// Returns `CliError` if persisting fails or output fails.
pub fn toggle<S: KeyValueStore>(
    favorites: &mut Favorites<S>,
    id: PropertyId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if favorites.toggle(id)? {
        writeln!(out, "Added #{id} to favorites.")?;
    } else {
        writeln!(out, "Removed #{id} from favorites.")?;
    }
    Ok(())
}
