//! Main application configuration and router setup

use axum::{routing::get, Router};
use faultline_web::middleware::{cors_layer_with_config, handle_not_found, with_error_logging, with_request_id, CorsConfig};
use tower_http::trace::TraceLayer;

use crate::{context::AppContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// CORS policy used when `enable_cors` is set
    pub cors: CorsConfig,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors: CorsConfig::default(),
            enable_request_id: true,
            enable_tracing: true,
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: AppContext, config: AppConfig) -> Router {
    let app = Router::new()
        .route("/", get(handlers::root))
        // Health endpoints
        .route("/health", get(handlers::health_check))
        .route("/health/detailed", get(handlers::health_check_detailed))
        // Records
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/{item_id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/{user_id}", get(handlers::get_user))
        // Fault injection
        .route("/slow-endpoint", get(handlers::slow_endpoint))
        .route("/cpu-intensive", get(handlers::cpu_intensive))
        .route("/random-error", get(handlers::random_error))
        .route("/memory-spike", get(handlers::memory_spike))
        .route("/cascade-failure", get(handlers::cascade_failure))
        // Analytics
        .route("/analytics/items-summary", get(handlers::items_summary))
        .route("/analytics/users-summary", get(handlers::users_summary))
        .fallback(handle_not_found)
        .with_state(context);

    // Add middleware layers (last added runs first)
    let mut app = with_error_logging(app);

    if config.enable_request_id {
        app = with_request_id(app);
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    if config.enable_cors {
        app = app.layer(cors_layer_with_config(config.cors));
    }

    app
}
