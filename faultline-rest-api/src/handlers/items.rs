//! Item CRUD endpoints

use axum::{extract::State, Json};
use faultline_api_types::{Item, PageRequest, RecordId};
use faultline_web::{JsonBody, PathParam, QueryParams};
use tracing::info;

use crate::{
    context::AppContext,
    errors::RestResult,
    models::{common::MessageResponse, items::ItemListResponse},
};

/// List items with skip/limit pagination
pub async fn list_items(
    State(ctx): State<AppContext>,
    QueryParams(page): QueryParams<PageRequest>,
) -> RestResult<Json<ItemListResponse>> {
    let page = ctx.repositories.item_repository().list(page).await?;
    Ok(Json(page.into()))
}

/// Get a single item by id
pub async fn get_item(
    State(ctx): State<AppContext>,
    PathParam(item_id): PathParam<RecordId>,
) -> RestResult<Json<Item>> {
    let item = ctx.repositories.item_repository().find_by_id(item_id).await?;
    Ok(Json(item))
}

/// Create an item under the id carried in the body
pub async fn create_item(State(ctx): State<AppContext>, JsonBody(item): JsonBody<Item>) -> RestResult<Json<Item>> {
    info!("Creating item {}", item.id);

    let item = ctx.repositories.item_repository().create(item).await?;
    Ok(Json(item))
}

/// Replace the item stored under the path id with the submitted body
pub async fn update_item(
    State(ctx): State<AppContext>,
    PathParam(item_id): PathParam<RecordId>,
    JsonBody(item): JsonBody<Item>,
) -> RestResult<Json<Item>> {
    info!("Updating item {}", item_id);

    let item = ctx.repositories.item_repository().update(item_id, item).await?;
    Ok(Json(item))
}

/// Delete an item and confirm with a message
pub async fn delete_item(
    State(ctx): State<AppContext>,
    PathParam(item_id): PathParam<RecordId>,
) -> RestResult<Json<MessageResponse>> {
    info!("Deleting item {}", item_id);

    ctx.repositories.item_repository().delete(item_id).await?;
    Ok(Json(MessageResponse::new(format!("Item {} deleted successfully", item_id))))
}
