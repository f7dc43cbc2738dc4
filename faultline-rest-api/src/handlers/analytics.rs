use axum::{extract::State, Json};

use crate::{
    context::AppContext,
    errors::RestResult,
    models::analytics::{ItemsSummary, UsersSummary},
};

/// Price statistics over a snapshot of the item table
pub async fn items_summary(State(ctx): State<AppContext>) -> RestResult<Json<ItemsSummary>> {
    let items = ctx.repositories.item_repository().all().await?;
    Ok(Json(ItemsSummary::from_items(&items)))
}

/// User count plus the full user listing
pub async fn users_summary(State(ctx): State<AppContext>) -> RestResult<Json<UsersSummary>> {
    let users = ctx.repositories.user_repository().all().await?;
    Ok(Json(UsersSummary::from_users(&users)))
}
