//! HTTP client for the listing API.
//!
//! Every failure to reach the service or make sense of its reply surfaces
//! as a [`ClientError`]. Nothing is retried: reads are cheap to repeat by
//! hand and creates are single-shot.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use homestead_core::{NewProperty, Property, PropertyId};

/// Errors talking to the listing service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read.
    #[error("listing service unavailable: {0}")]
    Http(#[from] reqwest::Error),

    /// No listing has the requested ID.
    #[error("property {0} not found")]
    NotFound(PropertyId),

    /// The service refused a create payload.
    #[error("listing rejected: {0}")]
    Rejected(String),

    /// The service answered with an unexpected status.
    #[error("listing service returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// JSON error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the `/api/properties` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the HTTP client can't be built.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("homestead-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Fetch every listing.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the service is unreachable or replies with an
    /// error.
    pub async fn list_properties(&self) -> Result<Vec<Property>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/api/properties"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected(response).await);
        }
        Ok(response.json().await?)
    }

    /// Fetch a single listing.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` for an unknown ID, or another
    /// `ClientError` if the request fails.
    pub async fn get_property(&self, id: PropertyId) -> Result<Property, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/properties/{id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(unexpected(response).await),
        }
    }

    /// Create a listing and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Rejected` if the service refuses the payload, or
    /// another `ClientError` if the request fails.
    pub async fn create_property(&self, new: &NewProperty) -> Result<Property, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/api/properties"))
            .json(new)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => Err(ClientError::Rejected(message_of(response).await)),
            _ => Err(unexpected(response).await),
        }
    }
}

async fn message_of(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

async fn unexpected(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    ClientError::Status {
        status,
        message: message_of(response).await,
    }
}
