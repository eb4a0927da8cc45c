//! Plain-text rendering of listings.

use homestead_core::Property;

/// Marker shown before favorited listings.
const FAVORITE_MARK: &str = "★";

/// Transaction types a listing is offered under.
#[must_use]
pub fn offer_label(property: &Property) -> &'static str {
    match (property.is_for_sale, property.is_for_rent) {
        (true, true) => "For sale · For rent",
        (true, false) => "For sale",
        (false, true) => "For rent",
        (false, false) => "Off market",
    }
}

/// Multi-line card for list output.
#[must_use]
pub fn card(property: &Property, favorite: bool) -> String {
    let mark = if favorite { FAVORITE_MARK } else { " " };
    format!(
        "{mark} #{id} {title}\n    {price} · {offer}\n    {address}, {city} - {state}\n    {beds} bd · {baths} ba · {area} m²",
        id = property.id,
        title = property.title,
        price = property.price,
        offer = offer_label(property),
        address = property.address,
        city = property.city,
        state = property.state,
        beds = property.bedrooms,
        baths = property.bathrooms,
        area = property.square_meters,
    )
}

/// Full detail view for a single listing.
#[must_use]
pub fn detail(property: &Property, favorite: bool) -> String {
    let mut out = format!(
        "{card}\n    {zip} ({lat}, {lng})\n    {image}",
        card = card(property, favorite),
        zip = property.zip_code,
        lat = property.latitude,
        lng = property.longitude,
        image = property.image_url,
    );
    if !property.description.is_empty() {
        out.push_str("\n\n");
        out.push_str(&property.description);
    }
    out
}
