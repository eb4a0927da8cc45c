//! Mock listings loaded at startup.

use rust_decimal::Decimal;

use homestead_core::NewProperty;

use super::{PropertyRepository, RepositoryError};

/// The demo listings: a sale-only apartment in São Paulo and a villa in Rio
/// de Janeiro offered for both sale and rent.
#[must_use]
pub fn mock_properties() -> Vec<NewProperty> {
    vec![
        NewProperty {
            title: "Modern Apartment in Downtown".to_string(),
            description: "Beautiful modern apartment with city views".to_string(),
            price: Decimal::new(45_000_000, 2),
            address: "123 Main St".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01310-000".to_string(),
            latitude: Decimal::new(-235_505, 4),
            longitude: Decimal::new(-466_333, 4),
            bedrooms: 2,
            bathrooms: 2,
            square_meters: 85,
            is_for_sale: true,
            is_for_rent: false,
            image_url: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800&auto=format"
                .to_string(),
        },
        NewProperty {
            title: "Luxury Villa with Pool".to_string(),
            description: "Spacious villa with private pool".to_string(),
            price: Decimal::new(250_000_000, 2),
            address: "456 Beach Ave".to_string(),
            city: "Rio de Janeiro".to_string(),
            state: "RJ".to_string(),
            zip_code: "22070-900".to_string(),
            latitude: Decimal::new(-229_068, 4),
            longitude: Decimal::new(-431_729, 4),
            bedrooms: 4,
            bathrooms: 3,
            square_meters: 250,
            is_for_sale: true,
            is_for_rent: true,
            image_url: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800&auto=format"
                .to_string(),
        },
    ]
}

/// Insert the mock listings into `repo`.
///
/// # Errors
///
/// Returns `RepositoryError` if a mock listing fails validation.
pub fn load(repo: &dyn PropertyRepository) -> Result<usize, RepositoryError> {
    let listings = mock_properties();
    let count = listings.len();
    for listing in listings {
        repo.create(listing)?;
    }
    tracing::info!(count, "Seeded mock listings");
    Ok(count)
}
