//! Share text for a listing.

use crate::types::{Property, PropertyId};

/// Message shared alongside a listing link.
#[must_use]
pub fn share_message(property: &Property) -> String {
    format!(
        "Confira este imóvel: {} em {}, {}, {}",
        property.title, property.address, property.city, property.state
    )
}

/// Detail page URL for a listing in the web app rooted at `base_url`.
#[must_use]
pub fn share_link(base_url: &str, id: PropertyId) -> String {
    format!("{}/property/{id}", base_url.trim_end_matches('/'))
}
