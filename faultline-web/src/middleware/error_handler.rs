use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tracing::{debug, error};

use crate::errors::{ExpectedFailure, WebError};

/// Logs server errors on the way out
///
/// Responses tagged with [`ExpectedFailure`] are injected faults and only
/// logged at debug level.
pub async fn error_handler_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        if response.extensions().get::<ExpectedFailure>().is_some() {
            debug!("Injected failure {} for {} {}", status, method, uri);
        } else {
            error!("Server error occurred: {} for {} {}", status, method, uri);
        }
    }

    response
}

/// Fallback for unknown routes
pub async fn handle_not_found() -> impl IntoResponse {
    WebError::not_found("Not Found")
}

/// Wrap every route of `router` with server error logging
pub fn with_error_logging<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(error_handler_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_response;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tower::ServiceExt;

    async fn error_handler() -> Response {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "Test error")
    }

    async fn injected() -> Response {
        let mut response = error_response(StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE", "simulated");
        response.extensions_mut().insert(ExpectedFailure);
        response
    }

    fn app() -> Router {
        with_error_logging(
            Router::new()
                .route("/error", get(error_handler))
                .route("/injected", get(injected))
                .fallback(handle_not_found),
        )
    }

    #[tokio::test]
    async fn test_error_passes_through() {
        let request = Request::builder().uri("/error").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_expected_failure_keeps_status() {
        let request = Request::builder().uri("/injected").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_route_is_structured_404() {
        let request = Request::builder().uri("/nowhere").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
