//! # Faultline Web Utilities
//!
//! Reusable web plumbing for building HTTP APIs with Axum: structured error
//! responses, CORS, request IDs, server-error logging and typed extractors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use faultline_web::{
//!     middleware::{cors_layer, with_error_logging, with_request_id},
//!     extractors::QueryParams,
//! };
//! use std::collections::HashMap;
//!
//! async fn list_items(QueryParams(_query): QueryParams<HashMap<String, String>>) -> &'static str {
//!     "items"
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app: Router = Router::new().route("/items", get(list_items));
//! let app = with_request_id(with_error_logging(app)).layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;

// Re-export commonly used types and functions
pub use errors::{error_response, ExpectedFailure, WebError};
pub use extractors::{JsonBody, PathParam, QueryParams};
pub use middleware::{cors_layer, with_error_logging, with_request_id, RequestId, REQUEST_ID_HEADER};
