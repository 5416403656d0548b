use crate::{
    abstract_trait::item::service::{DynItemCommandService, DynItemQueryService},
    domain::{
        requests::item::{CreateItemRequest, UpdateItemRequest},
        response::item::{DeleteItemResponse, ItemResponse},
    },
    middleware::{json::JsonBody, path::PathParam},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/items",
    tag = "Item",
    responses(
        (status = 200, description = "All items in creation order", body = Vec<ItemResponse>)
    )
)]
pub async fn get_items(
    Extension(service): Extension<DynItemQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item ID")
    )
)]
pub async fn get_item(
    Extension(service): Extension<DynItemQueryService>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "Item",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_item(
    Extension(service): Extension<DynItemCommandService>,
    JsonBody(body): JsonBody<CreateItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_item(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item replaced", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item ID or body")
    )
)]
pub async fn update_item(
    Extension(service): Extension<DynItemCommandService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_item(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = DeleteItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item ID")
    )
)]
pub async fn delete_item(
    Extension(service): Extension<DynItemCommandService>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_item(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/items", get(get_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(Extension(app_state.di_container.item_query.clone()))
        .layer(Extension(app_state.di_container.item_command.clone()))
}
