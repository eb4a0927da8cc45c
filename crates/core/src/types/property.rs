//! Property listing records.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::id::PropertyId;
use super::price::Price;

/// Errors that can occur when validating a [`NewProperty`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{field} cannot be blank")]
    Blank {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// A coordinate lies outside its valid range.
    #[error("{field} must be between -{max} and {max}")]
    CoordinateOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Absolute bound for the coordinate.
        max: u8,
    },
}

/// A real-estate listing as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_meters: u32,
    pub is_for_sale: bool,
    pub is_for_rent: bool,
    pub image_url: String,
}

/// Create payload for a listing: every [`Property`] field except `id`.
///
/// Deserialization enforces presence and types. Counts are unsigned, so
/// negative bedrooms or areas are rejected at that stage. Range checks that
/// serde can't express live in [`NewProperty::validate`].
///
/// A listing may be neither for sale nor for rent; that combination is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_meters: u32,
    pub is_for_sale: bool,
    pub is_for_rent: bool,
    pub image_url: String,
}

/// A [`NewProperty`] that passed validation and had its decimals normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProperty(NewProperty, Price);

impl NewProperty {
    /// Decimal places kept for latitude and longitude.
    pub const COORDINATE_SCALE: u32 = 7;

    /// Validate the payload and normalize its decimal fields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `title`, `city` or `imageUrl` is blank
    /// - `price` is negative
    /// - `latitude` is outside -90..=90 or `longitude` outside -180..=180
    pub fn validate(mut self) -> Result<ValidProperty, ValidationError> {
        for (field, value) in [
            ("title", &self.title),
            ("city", &self.city),
            ("imageUrl", &self.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Blank { field });
            }
        }

        let price = Price::new(self.price).ok_or(ValidationError::NegativePrice)?;
        self.price = price.amount();

        self.latitude = check_coordinate("latitude", self.latitude, 90)?;
        self.longitude = check_coordinate("longitude", self.longitude, 180)?;

        Ok(ValidProperty(self, price))
    }
}

impl ValidProperty {
    /// Attach the identifier assigned by storage.
    #[must_use]
    pub fn into_property(self, id: PropertyId) -> Property {
        let Self(new, price) = self;
        Property {
            id,
            title: new.title,
            description: new.description,
            price,
            address: new.address,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            latitude: new.latitude,
            longitude: new.longitude,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            square_meters: new.square_meters,
            is_for_sale: new.is_for_sale,
            is_for_rent: new.is_for_rent,
            image_url: new.image_url,
        }
    }
}

fn check_coordinate(
    field: &'static str,
    value: Decimal,
    max: u8,
) -> Result<Decimal, ValidationError> {
    let bound = Decimal::from(max);
    if value < -bound || value > bound {
        return Err(ValidationError::CoordinateOutOfRange { field, max });
    }
    Ok(value.round_dp_with_strategy(
        NewProperty::COORDINATE_SCALE,
        RoundingStrategy::MidpointAwayFromZero,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "title": "Modern Apartment in Downtown",
            "description": "Beautiful modern apartment with city views",
            "price": 450_000.00,
            "address": "123 Main St",
            "city": "São Paulo",
            "state": "SP",
            "zipCode": "01310-000",
            "latitude": -23.5505,
            "longitude": -46.6333,
            "bedrooms": 2,
            "bathrooms": 2,
            "squareMeters": 85,
            "isForSale": true,
            "isForRent": false,
            "imageUrl": "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2"
        })
    }

    #[test]
    fn test_new_property_accepts_numbers_and_strings() {
        let from_numbers: NewProperty = serde_json::from_value(payload()).unwrap();

        let mut value = payload();
        value["price"] = serde_json::json!("450000.00");
        let from_strings: NewProperty = serde_json::from_value(value).unwrap();

        assert_eq!(from_numbers.price, from_strings.price);
    }

    #[test]
    fn test_new_property_rejects_missing_field() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("city");
        assert!(serde_json::from_value::<NewProperty>(value).is_err());
    }

    #[test]
    fn test_new_property_rejects_wrong_type() {
        let mut value = payload();
        value["bedrooms"] = serde_json::json!("two");
        assert!(serde_json::from_value::<NewProperty>(value).is_err());

        let mut value = payload();
        value["bathrooms"] = serde_json::json!(-1);
        assert!(serde_json::from_value::<NewProperty>(value).is_err());
    }

    #[test]
    fn test_new_property_ignores_unknown_fields() {
        let mut value = payload();
        value["id"] = serde_json::json!(99);
        value["featured"] = serde_json::json!(true);
        assert!(serde_json::from_value::<NewProperty>(value).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut value = payload();
        value["price"] = serde_json::json!(-10);
        let new: NewProperty = serde_json::from_value(value).unwrap();
        assert_eq!(new.validate().unwrap_err(), ValidationError::NegativePrice);
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut value = payload();
        value["title"] = serde_json::json!("   ");
        let new: NewProperty = serde_json::from_value(value).unwrap();
        assert_eq!(
            new.validate().unwrap_err(),
            ValidationError::Blank { field: "title" }
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        let mut value = payload();
        value["latitude"] = serde_json::json!(91);
        let new: NewProperty = serde_json::from_value(value).unwrap();
        assert!(matches!(
            new.validate().unwrap_err(),
            ValidationError::CoordinateOutOfRange {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_allows_neither_sale_nor_rent() {
        let mut value = payload();
        value["isForSale"] = serde_json::json!(false);
        let new: NewProperty = serde_json::from_value(value).unwrap();
        let property = new.validate().unwrap().into_property(PropertyId::new(1));
        assert!(!property.is_for_sale && !property.is_for_rent);
    }

    #[test]
    fn test_property_serializes_camel_case() {
        let new: NewProperty = serde_json::from_value(payload()).unwrap();
        let property = new.validate().unwrap().into_property(PropertyId::new(3));
        let json = serde_json::to_value(&property).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["zipCode"], "01310-000");
        assert_eq!(json["squareMeters"], 85);
        assert_eq!(json["isForSale"], true);
        assert!(json.get("zip_code").is_none());
    }
}
