//! Health check endpoints

use axum::{extract::State, Json};
use tracing::{debug, warn};

use crate::{
    context::AppContext,
    errors::RestResult,
    models::common::{DetailedHealthResponse, HealthResponse},
};

/// Liveness probe; never touches the store
pub async fn health_check(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    debug!("Health check requested");

    Json(HealthResponse::healthy(ctx.uptime()))
}

/// Health check with store statistics
pub async fn health_check_detailed(State(ctx): State<AppContext>) -> RestResult<Json<DetailedHealthResponse>> {
    debug!("Detailed health check requested");

    let status = match ctx.repositories.health_check().await {
        Ok(()) => "healthy",
        Err(e) => {
            warn!("Store health check failed: {}", e);
            "degraded"
        }
    };

    let total_items = ctx.repositories.item_repository().count().await?;
    let total_users = ctx.repositories.user_repository().count().await?;
    let base = HealthResponse::healthy(ctx.uptime());

    Ok(Json(DetailedHealthResponse {
        status: status.to_string(),
        timestamp: base.timestamp,
        uptime_seconds: base.uptime_seconds,
        total_items,
        total_users,
        api_version: ctx.api_version.clone(),
    }))
}
