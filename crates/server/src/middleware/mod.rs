//! HTTP middleware stack for the server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record in span, echo in response header)
//! 4. CORS (only when `HOMESTEAD_CORS_ORIGIN` is set)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
