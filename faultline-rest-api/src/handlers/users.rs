//! User endpoints: create and read only

use axum::{extract::State, Json};
use faultline_api_types::{PageRequest, RecordId, User};
use faultline_web::{JsonBody, PathParam, QueryParams};
use tracing::info;

use crate::{context::AppContext, errors::RestResult, models::users::UserListResponse};

/// List users with skip/limit pagination
pub async fn list_users(
    State(ctx): State<AppContext>,
    QueryParams(page): QueryParams<PageRequest>,
) -> RestResult<Json<UserListResponse>> {
    let page = ctx.repositories.user_repository().list(page).await?;
    Ok(Json(page.into()))
}

/// Get a single user by id
pub async fn get_user(
    State(ctx): State<AppContext>,
    PathParam(user_id): PathParam<RecordId>,
) -> RestResult<Json<User>> {
    let user = ctx.repositories.user_repository().find_by_id(user_id).await?;
    Ok(Json(user))
}

/// Create a user under the id carried in the body
pub async fn create_user(State(ctx): State<AppContext>, JsonBody(user): JsonBody<User>) -> RestResult<Json<User>> {
    info!("Creating user {} ({})", user.id, user.username);

    let user = ctx.repositories.user_repository().create(user).await?;
    Ok(Json(user))
}
