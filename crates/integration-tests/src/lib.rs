//! Integration tests for Homestead.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p homestead-integration-tests
//! ```
//!
//! Each test starts its own server on an ephemeral port via [`TestServer`],
//! so tests run in parallel without sharing listing state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use homestead_server::config::ServerConfig;
use homestead_server::db::{self, InMemoryPropertyRepository};
use homestead_server::state::AppState;

/// A listing server running in the background for the duration of a test.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server, loading the mock listings when `seed` is true.
    ///
    /// # Panics
    ///
    /// Panics if the listener can't be bound or seeding fails.
    pub async fn start(seed: bool) -> Self {
        let repository = Arc::new(InMemoryPropertyRepository::new());
        if seed {
            db::seed::load(&*repository).expect("Failed to seed mock listings");
        }

        let config = ServerConfig {
            port: 0,
            seed,
            ..ServerConfig::default()
        };
        let app = homestead_server::app(AppState::new(config, repository));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, handle }
    }

    /// Base URL of the running server.
    ///
    /// # Panics
    ///
    /// Panics if the socket address doesn't form a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("Socket address is a valid URL")
    }

    /// Absolute URL for `path` on the running server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
