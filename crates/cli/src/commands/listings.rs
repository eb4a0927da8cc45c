//! Listing commands: browse, inspect, create, share and map.
//!
//! # Usage
//!
//! ```bash
//! # Everything for rent in São Paulo with 2+ bedrooms
//! homestead list --type rent --city sao --bedrooms 2
//!
//! # One listing in detail
//! homestead show 2
//!
//! # Create a listing from a JSON file
//! homestead create villa.json
//!
//! # Map markers for listings under R$ 1.000.000
//! homestead markers --max-price 1000000
//!
//! # Map centered on one listing
//! homestead markers --id 2
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use url::Url;

use homestead_core::map::{self, MapMarker, Viewport};
use homestead_core::share::{share_link, share_message};
use homestead_core::{
    Favorites, FilterCriteria, KeyValueStore, NewProperty, Property, PropertyId, filter_properties,
};

use crate::client::ApiClient;
use crate::error::CliError;
use crate::render;

/// Payload printed by the `markers` command.
#[derive(Debug, Serialize)]
pub struct MapView {
    pub viewport: Viewport,
    pub markers: Vec<MapMarker>,
}

/// Fetch all listings and print the ones matching `criteria`.
///
/// # Errors
///
/// Returns `CliError` if the service can't be reached or output fails.
pub async fn list<S: KeyValueStore + Sync>(
    client: &ApiClient,
    favorites: &Favorites<S>,
    criteria: &FilterCriteria,
    json: bool,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let properties = client.list_properties().await?;
    tracing::debug!(total = properties.len(), "Fetched listings");
    write_listing(&properties, favorites, criteria, json, out)
}

/// Filter `properties` and write them as cards or JSON.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn write_listing<S: KeyValueStore>(
    properties: &[Property],
    favorites: &Favorites<S>,
    criteria: &FilterCriteria,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let matches = filter_properties(properties, criteria);

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No properties match your filters.")?;
        return Ok(());
    }

    for property in &matches {
        writeln!(out, "{}\n", render::card(property, favorites.is_favorite(property.id)))?;
    }
    writeln!(out, "{} of {} properties", matches.len(), properties.len())?;
    Ok(())
}

/// Print one listing in detail.
///
/// # Errors
///
/// Returns `CliError` if the listing doesn't exist or the request fails.
pub async fn show<S: KeyValueStore + Sync>(
    client: &ApiClient,
    favorites: &Favorites<S>,
    id: PropertyId,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let property = client.get_property(id).await?;
    writeln!(out, "{}", render::detail(&property, favorites.is_favorite(id)))?;
    Ok(())
}

/// Create a listing from the JSON file at `path`.
///
/// # Errors
///
/// Returns `CliError::InvalidPayload` if the file isn't a valid listing, or
/// another `CliError` if reading or the request fails.
pub async fn create(
    client: &ApiClient,
    path: &Path,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(path)?;
    let new = parse_listing(&raw)?;

    let property = client.create_property(&new).await?;
    tracing::info!(property_id = %property.id, "Listing created");
    writeln!(out, "Created property #{}", property.id)?;
    writeln!(out, "{}", render::card(&property, false))?;
    Ok(())
}

/// Parse and check a create payload before sending it.
///
/// # Errors
///
/// Returns `CliError::InvalidPayload` describing the first problem found.
pub fn parse_listing(raw: &str) -> Result<NewProperty, CliError> {
    let new: NewProperty =
        serde_json::from_str(raw).map_err(|e| CliError::InvalidPayload(e.to_string()))?;
    new.clone()
        .validate()
        .map_err(|e| CliError::InvalidPayload(e.to_string()))?;
    Ok(new)
}

/// Print share text and a link to the listing's page in the web app.
///
/// # Errors
///
/// Returns `CliError` if the listing doesn't exist or the request fails.
pub async fn share(
    client: &ApiClient,
    web_url: &Url,
    id: PropertyId,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let property = client.get_property(id).await?;
    write_share(&property, web_url, out)
}

/// Write the share message and the detail page link under `web_url`.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn write_share(
    property: &Property,
    web_url: &Url,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", share_message(property))?;
    writeln!(out, "{}", share_link(web_url.as_str(), property.id))?;
    Ok(())
}

/// Print map markers for the listings matching `criteria`.
///
/// # Errors
///
/// Returns `CliError` if the service can't be reached or output fails.
pub async fn markers(
    client: &ApiClient,
    criteria: &FilterCriteria,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let properties = client.list_properties().await?;
    write_markers(&properties, criteria, out)
}

/// Write the default viewport and one marker per matching listing as JSON.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn write_markers(
    properties: &[Property],
    criteria: &FilterCriteria,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let view = MapView {
        viewport: Viewport::default(),
        markers: map::markers(&filter_properties(properties, criteria)),
    };
    write_map(&view, out)
}

/// Print a map centered on one listing, with its marker.
///
/// # Errors
///
/// Returns `CliError` if the listing doesn't exist or the request fails.
pub async fn listing_map(
    client: &ApiClient,
    id: PropertyId,
    out: &mut (impl Write + Send),
) -> Result<(), CliError> {
    let property = client.get_property(id).await?;
    write_listing_map(&property, out)
}

/// Write a street-level viewport around `property` and its marker as JSON.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn write_listing_map(property: &Property, out: &mut impl Write) -> Result<(), CliError> {
    let view = MapView {
        viewport: Viewport::around(property),
        markers: vec![MapMarker::from(property)],
    };
    write_map(&view, out)
}

fn write_map(view: &MapView, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, view).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
