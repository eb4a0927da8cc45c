//! End-to-end flows through the CLI's API client, local filtering and
//! favorites storage.

use homestead_cli::commands::listings;
use homestead_cli::{ApiClient, ClientError, JsonFileStore};
use homestead_core::{
    Favorites, FilterCriteria, ListingType, NewProperty, PropertyId, filter_properties,
};
use homestead_integration_tests::TestServer;
use rust_decimal::Decimal;

fn client(server: &TestServer) -> ApiClient {
    ApiClient::new(server.base_url()).expect("Failed to build API client")
}

fn titles(properties: &[homestead_core::Property]) -> Vec<&str> {
    properties.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_filter_scenario_over_live_listings() {
    let server = TestServer::start(true).await;
    let all = client(&server)
        .list_properties()
        .await
        .expect("Failed to list properties");

    assert_eq!(
        titles(&all),
        vec!["Modern Apartment in Downtown", "Luxury Villa with Pool"]
    );

    let rent = FilterCriteria {
        listing_type: ListingType::Rent,
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_properties(&all, &rent)),
        vec!["Luxury Villa with Pool"]
    );

    let sao = FilterCriteria {
        city: Some("sao".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_properties(&all, &sao)),
        vec!["Modern Apartment in Downtown"]
    );

    let expensive = FilterCriteria {
        min_price: Some(Decimal::from(1_000_000)),
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_properties(&all, &expensive)),
        vec!["Luxury Villa with Pool"]
    );

    assert_eq!(filter_properties(&all, &FilterCriteria::default()), all);
}

#[tokio::test]
async fn test_get_unknown_property() {
    let server = TestServer::start(true).await;
    let err = client(&server)
        .get_property(PropertyId::new(999))
        .await
        .expect_err("Unknown id should fail");

    assert!(matches!(err, ClientError::NotFound(id) if id == PropertyId::new(999)));
}

#[tokio::test]
async fn test_create_round_trip_through_client() {
    let server = TestServer::start(true).await;
    let api = client(&server);

    let mut new: NewProperty = serde_json::from_value(serde_json::json!({
        "title": "Beach Bungalow",
        "description": "Steps from the sand",
        "price": "980000.00",
        "address": "7 Orla St",
        "city": "Florianópolis",
        "state": "SC",
        "zipCode": "88000-000",
        "latitude": "-27.5954",
        "longitude": "-48.5480",
        "bedrooms": 3,
        "bathrooms": 2,
        "squareMeters": 140,
        "isForSale": false,
        "isForRent": true,
        "imageUrl": "https://example.com/bungalow.jpg"
    }))
    .expect("Valid payload");

    let created = api.create_property(&new).await.expect("Create failed");
    assert_eq!(created.id, PropertyId::new(3));
    assert_eq!(
        api.get_property(created.id).await.expect("Fetch failed"),
        created
    );

    new.price = Decimal::from(-1);
    let err = api
        .create_property(&new)
        .await
        .expect_err("Negative price should be rejected");
    assert!(matches!(err, ClientError::Rejected(ref m) if m == "Invalid property data"));
}

#[tokio::test]
async fn test_share_links_to_web_app_not_api() {
    let server = TestServer::start(true).await;
    let api = client(&server);
    let web_url = "https://homes.example/app/".parse().expect("Valid URL");

    let mut out = Vec::new();
    listings::share(&api, &web_url, PropertyId::new(1), &mut out)
        .await
        .expect("Share failed");
    let text = String::from_utf8(out).expect("Share output is UTF-8");

    let link = text.lines().last().expect("Share output has a link");
    assert_eq!(link, "https://homes.example/app/property/1");
    assert!(!text.contains(server.base_url().as_str()));
}

#[tokio::test]
async fn test_unreachable_service() {
    // Reserve a port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve a port");
    let url = format!("http://{addr}").parse().expect("Valid URL");

    let api = ApiClient::new(url).expect("Failed to build API client");
    let result = api.list_properties().await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn test_favorites_persist_between_sessions() {
    let server = TestServer::start(true).await;
    let all = client(&server)
        .list_properties()
        .await
        .expect("Failed to list properties");
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let mut favorites = Favorites::load(JsonFileStore::new(&path));
        for property in &all {
            favorites.add(property.id).expect("Failed to persist favorite");
        }
        favorites
            .remove(PropertyId::new(1))
            .expect("Failed to persist removal");
    }

    let favorites = Favorites::load(JsonFileStore::new(&path));
    assert!(!favorites.is_favorite(PropertyId::new(1)));
    assert!(favorites.is_favorite(PropertyId::new(2)));
}
