use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Widget")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "A small widget")]
    pub description: Option<String>,

    #[schema(example = 9.99)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = 0)]
    pub quantity: i64,
}

/// Full replacement of an item's mutable fields. A missing `description`
/// clears it and a missing `quantity` resets it to zero.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[schema(example = "Widget2")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[schema(example = 12.5)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = 3)]
    pub quantity: i64,
}
