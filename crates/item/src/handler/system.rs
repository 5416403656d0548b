use crate::{
    domain::response::system::{EndpointsResponse, HealthResponse, ServiceInfoResponse},
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use shared::{
    errors::HttpError,
    utils::{Clock, format_datetime},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Service overview", body = ServiceInfoResponse))
)]
pub async fn root(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(ServiceInfoResponse {
        message: "Welcome to the Item Store API!".to_string(),
        status: "running".to_string(),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        platform: state.platform.clone(),
        endpoints: EndpointsResponse {
            docs: "/docs".to_string(),
            items: "/items".to_string(),
            health: "/health".to_string(),
        },
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Liveness and item count", body = HealthResponse))
)]
pub async fn health_check(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let total_items = state.di_container.item_query.count().await?;

    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: format_datetime(&state.clock.now()),
            total_items,
            platform: state.platform.clone(),
        }),
    ))
}

pub fn system_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .layer(Extension(app_state))
}
