use axum::{extract::State, Json};

use crate::{
    context::AppContext,
    models::common::{EndpointIndex, RootResponse},
};

/// Service banner with the main entry points
pub async fn root(State(ctx): State<AppContext>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Performance Testing API".to_string(),
        version: ctx.api_version.clone(),
        endpoints: EndpointIndex::default(),
    })
}
