//! Narrowing a listing sequence by user-selected search criteria.
//!
//! Filtering happens on the client after the full list has been fetched.
//! [`filter_properties`] is pure and preserves the relative order of its
//! input, so filtering an already-filtered list with the same criteria is a
//! no-op.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Property;

/// Which transaction type a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    /// Any listing.
    #[default]
    All,
    /// Listings with `is_for_sale` set.
    Sale,
    /// Listings with `is_for_rent` set.
    Rent,
}

impl ListingType {
    /// Returns the wire name of the listing type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }

    const fn admits(self, property: &Property) -> bool {
        match self {
            Self::All => true,
            Self::Sale => property.is_for_sale,
            Self::Rent => property.is_for_rent,
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`ListingType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown listing type '{0}' (expected all, sale or rent)")]
pub struct ParseListingTypeError(String);

impl FromStr for ListingType {
    type Err = ParseListingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            _ => Err(ParseListingTypeError(s.to_owned())),
        }
    }
}

/// The user's current search constraints.
///
/// Every field is optional; an unset field places no constraint on results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Sale/rent restriction.
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// Substring of the city name, compared ignoring case and accents.
    pub city: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Minimum number of bedrooms.
    pub bedrooms: Option<u32>,
}

impl FilterCriteria {
    /// Returns true if no field constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listing_type == ListingType::All
            && self.city_needle().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
    }

    /// Returns true if `property` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_with_needle(property, self.city_needle().as_deref())
    }

    fn matches_with_needle(&self, property: &Property, city: Option<&str>) -> bool {
        if !self.listing_type.admits(property) {
            return false;
        }

        if let Some(needle) = city
            && !fold(&property.city).contains(needle)
        {
            return false;
        }

        let price = property.price.amount();
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }

        self.bedrooms.is_none_or(|min| property.bedrooms >= min)
    }

    /// The folded city search term, or `None` when blank.
    fn city_needle(&self) -> Option<String> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(fold)
    }
}

/// Return the listings that satisfy `criteria`, in their original order.
#[must_use]
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let needle = criteria.city_needle();
    properties
        .iter()
        .filter(|property| criteria.matches_with_needle(property, needle.as_deref()))
        .cloned()
        .collect()
}

/// Lowercase `text` and strip the diacritics found in Latin-script city names.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{NewProperty, PropertyId};

    fn listing(id: i32, city: &str, price: i64, bedrooms: u32, sale: bool, rent: bool) -> Property {
        NewProperty {
            title: format!("Listing {id}"),
            description: String::new(),
            price: Decimal::from(price),
            address: "1 Test St".to_owned(),
            city: city.to_owned(),
            state: "SP".to_owned(),
            zip_code: "00000-000".to_owned(),
            latitude: Decimal::ZERO,
            longitude: Decimal::ZERO,
            bedrooms,
            bathrooms: 1,
            square_meters: 50,
            is_for_sale: sale,
            is_for_rent: rent,
            image_url: "https://example.com/image.jpg".to_owned(),
        }
        .validate()
        .unwrap()
        .into_property(PropertyId::new(id))
    }

    fn sample() -> Vec<Property> {
        vec![
            listing(1, "São Paulo", 450_000, 2, true, false),
            listing(2, "Rio de Janeiro", 2_500_000, 4, true, true),
            listing(3, "Campinas", 3_500, 1, false, true),
        ]
    }

    fn ids(properties: &[Property]) -> Vec<i32> {
        properties.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let all = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_properties(&all, &criteria), all);
    }

    #[test]
    fn test_filter_by_type() {
        let all = sample();

        let rent = FilterCriteria {
            listing_type: ListingType::Rent,
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &rent)), vec![2, 3]);

        let sale = FilterCriteria {
            listing_type: ListingType::Sale,
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &sale)), vec![1, 2]);
    }

    #[test]
    fn test_filter_by_city_ignores_case_and_accents() {
        let all = sample();
        let criteria = FilterCriteria {
            city: Some("sao".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![1]);

        let criteria = FilterCriteria {
            city: Some("  JANEIRO ".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![2]);
    }

    #[test]
    fn test_blank_city_places_no_constraint() {
        let all = sample();
        let criteria = FilterCriteria {
            city: Some("   ".to_owned()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filter_properties(&all, &criteria).len(), 3);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let all = sample();
        let criteria = FilterCriteria {
            min_price: Some(Decimal::from(450_000)),
            max_price: Some(Decimal::from(2_500_000)),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![1, 2]);

        let criteria = FilterCriteria {
            min_price: Some(Decimal::from(1_000_000)),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![2]);
    }

    #[test]
    fn test_minimum_bedrooms() {
        let all = sample();
        let criteria = FilterCriteria {
            bedrooms: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_criteria_combine() {
        let all = sample();
        let criteria = FilterCriteria {
            listing_type: ListingType::Rent,
            max_price: Some(Decimal::from(10_000)),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &criteria)), vec![3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let criteria = FilterCriteria {
            listing_type: ListingType::Sale,
            bedrooms: Some(2),
            ..Default::default()
        };
        let once = filter_properties(&all, &criteria);
        let twice = filter_properties(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_criteria_deserializes_from_client_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"type":"rent","city":"rio","minPrice":1000}"#).unwrap();
        assert_eq!(criteria.listing_type, ListingType::Rent);
        assert_eq!(criteria.city.as_deref(), Some("rio"));
        assert_eq!(criteria.min_price, Some(Decimal::from(1000)));
        assert_eq!(criteria.bedrooms, None);
    }

    #[test]
    fn test_listing_type_from_str() {
        assert_eq!("Sale".parse::<ListingType>().unwrap(), ListingType::Sale);
        assert!("lease".parse::<ListingType>().is_err());
    }
}
