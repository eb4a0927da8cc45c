//! Marker data handed to the external mapping provider.
//!
//! The provider draws one marker per listing and reports back which
//! [`PropertyId`] was activated; everything else about rendering stays on
//! its side.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::{Property, PropertyId};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Initial map center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for Viewport {
    /// Centered on São Paulo at city zoom.
    fn default() -> Self {
        Self {
            center: LatLng {
                lat: -23.5505,
                lng: -46.6333,
            },
            zoom: 12,
        }
    }
}

impl Viewport {
    /// Street-level zoom used when a single listing is shown.
    pub const LISTING_ZOOM: u8 = 15;

    /// Centered on `property` at street zoom.
    #[must_use]
    pub fn around(property: &Property) -> Self {
        Self {
            center: LatLng {
                lat: degrees(property.latitude),
                lng: degrees(property.longitude),
            },
            zoom: Self::LISTING_ZOOM,
        }
    }
}

/// One listing pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub property_id: PropertyId,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl From<&Property> for MapMarker {
    fn from(property: &Property) -> Self {
        Self {
            property_id: property.id,
            latitude: degrees(property.latitude),
            longitude: degrees(property.longitude),
            label: property.title.clone(),
        }
    }
}

/// Build a marker for every listing, in order.
#[must_use]
pub fn markers(properties: &[Property]) -> Vec<MapMarker> {
    properties.iter().map(MapMarker::from).collect()
}

// Validated coordinates are within +/-180, so the conversion can't overflow.
fn degrees(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
