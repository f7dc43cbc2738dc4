use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

const WILDCARD: &str = "*";

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins (`["*"]` for any origin)
    pub allowed_origins: Vec<String>,
    /// Allowed methods (`["*"]` for any method)
    pub allowed_methods: Vec<String>,
    /// Allowed headers (`["*"]` for any header)
    pub allowed_headers: Vec<String>,
    /// Allow credentials
    pub allow_credentials: bool,
    /// Maximum age for preflight cache
    pub max_age: Option<Duration>,
}

impl Default for CorsConfig {
    /// Fully open: any origin, method and header, credentials allowed
    fn default() -> Self {
        Self {
            allowed_origins: vec![WILDCARD.to_string()],
            allowed_methods: vec![WILDCARD.to_string()],
            allowed_headers: vec![WILDCARD.to_string()],
            allow_credentials: true,
            max_age: Some(Duration::from_secs(600)),
        }
    }
}

impl CorsConfig {
    /// Restrict to specific origins, keeping methods and headers open
    pub fn with_origins(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            ..Default::default()
        }
    }

    fn is_wildcard(values: &[String]) -> bool {
        values.iter().any(|value| value == WILDCARD)
    }
}

/// Create CORS layer with the default open configuration
pub fn cors_layer() -> CorsLayer {
    cors_layer_with_config(CorsConfig::default())
}

/// Create CORS layer with custom configuration
///
/// Wildcards combined with credentials are served by mirroring the request,
/// since browsers reject a literal `*` on credentialed responses.
pub fn cors_layer_with_config(config: CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if CorsConfig::is_wildcard(&config.allowed_origins) {
        cors = if config.allow_credentials {
            cors.allow_origin(AllowOrigin::mirror_request())
        } else {
            cors.allow_origin(Any)
        };
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if CorsConfig::is_wildcard(&config.allowed_methods) {
        cors = if config.allow_credentials {
            cors.allow_methods(AllowMethods::mirror_request())
        } else {
            cors.allow_methods(Any)
        };
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|method| method.parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if CorsConfig::is_wildcard(&config.allowed_headers) {
        cors = if config.allow_credentials {
            cors.allow_headers(AllowHeaders::mirror_request())
        } else {
            cors.allow_headers(Any)
        };
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|header| header.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    if let Some(max_age) = config.max_age {
        cors = cors.max_age(max_age);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    fn app(config: CorsConfig) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer_with_config(config))
    }

    #[tokio::test]
    async fn test_open_config_mirrors_origin() {
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, "http://loadtest.local")
            .body(Body::empty())
            .unwrap();

        let response = app(CorsConfig::default()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://loadtest.local"
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_preflight_allows_any_method() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ping")
            .header(header::ORIGIN, "http://loadtest.local")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .body(Body::empty())
            .unwrap();

        let response = app(CorsConfig::default()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "DELETE"
        );
    }

    #[tokio::test]
    async fn test_wildcard_without_credentials_uses_star() {
        let config = CorsConfig {
            allow_credentials: false,
            ..Default::default()
        };
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, "http://elsewhere.local")
            .body(Body::empty())
            .unwrap();

        let response = app(config).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_specific_origins_reject_others() {
        let config = CorsConfig::with_origins(vec!["http://allowed.local".to_string()]);
        let request = Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, "http://denied.local")
            .body(Body::empty())
            .unwrap();

        let response = app(config).oneshot(request).await.unwrap();

        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
