//! Listing API handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use homestead_core::{NewProperty, Property, PropertyId};

use crate::error::{AppError, Result};
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Property not found";

/// List every listing.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.properties().list_all())
}

/// Show a single listing.
///
/// IDs that don't parse as integers can't match any listing and are
/// reported as not found.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no listing has the requested ID.
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Property>> {
    let id = raw_id
        .parse::<PropertyId>()
        .map_err(|_| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    state
        .properties()
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// Create a listing from a JSON payload.
///
/// # Errors
///
/// Returns `AppError::InvalidBody` or `AppError::Validation` for a bad
/// payload, or `AppError::Internal` if the store can't assign an ID.
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewProperty>, JsonRejection>,
) -> Result<(StatusCode, Json<Property>)> {
    let Json(new) = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

    let property = state.properties().create(new)?;
    tracing::info!(property_id = %property.id, city = %property.city, "Listing created");

    Ok((StatusCode::CREATED, Json(property)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;
    use crate::db::{InMemoryPropertyRepository, seed};

    fn app() -> Router {
        let repo = Arc::new(InMemoryPropertyRepository::new());
        seed::load(&*repo).unwrap();
        crate::routes::routes().with_state(AppState::new(ServerConfig::default(), repo))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/properties")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn new_listing() -> Value {
        json!({
            "title": "Cozy Studio",
            "description": "Close to the metro",
            "price": 1800,
            "address": "9 Rua Augusta",
            "city": "São Paulo",
            "state": "SP",
            "zipCode": "01305-000",
            "latitude": -23.5535,
            "longitude": -46.6527,
            "bedrooms": 1,
            "bathrooms": 1,
            "squareMeters": 32,
            "isForSale": false,
            "isForRent": true,
            "imageUrl": "https://example.com/studio.jpg"
        })
    }

    #[tokio::test]
    async fn test_index_lists_seeded_properties_in_order() {
        let (status, body) = send(app(), get("/api/properties")).await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_show_existing_property() {
        let (status, body) = send(app(), get("/api/properties/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Rio de Janeiro");
        assert_eq!(body["isForRent"], true);
    }

    #[tokio::test]
    async fn test_show_unknown_property() {
        let (status, body) = send(app(), get("/api/properties/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Property not found" }));
    }

    #[tokio::test]
    async fn test_show_non_numeric_id_is_not_found() {
        let (status, body) = send(app(), get("/api/properties/abc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Property not found" }));
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let app = app();
        let (status, body) = send(app.clone(), post(&new_listing())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 3);
        assert_eq!(body["title"], "Cozy Studio");

        let (status, body) = send(app, get("/api/properties/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["squareMeters"], 32);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let mut listing = new_listing();
        listing.as_object_mut().unwrap().remove("price");

        let (status, body) = send(app(), post(&listing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Invalid property data" }));
    }

    #[tokio::test]
    async fn test_create_rejects_wrong_type() {
        let mut listing = new_listing();
        listing["isForSale"] = json!("yes");

        let (status, _) = send(app(), post(&listing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_values() {
        let mut listing = new_listing();
        listing["longitude"] = json!(200);

        let (status, body) = send(app(), post(&listing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Invalid property data" }));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/properties")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"title\":"))
            .unwrap();

        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Invalid property data" }));
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let app = app();
        let mut bad = new_listing();
        bad["price"] = json!(-1);
        let (status, _) = send(app.clone(), post(&bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(app, post(&new_listing())).await;
        assert_eq!(body["id"], 3);
    }
}
