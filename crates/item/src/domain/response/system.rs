use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: String,
    pub total_items: usize,
    #[schema(example = "standalone")]
    pub platform: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EndpointsResponse {
    pub docs: String,
    pub items: String,
    pub health: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ServiceInfoResponse {
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "production")]
    pub environment: String,
    pub version: String,
    #[schema(example = "standalone")]
    pub platform: String,
    pub endpoints: EndpointsResponse,
}
