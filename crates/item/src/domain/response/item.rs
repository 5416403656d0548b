use crate::model::item::Item as ItemModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    #[schema(example = "2024-01-01T12:00:00.000000")]
    pub created_at: String,
    #[schema(example = "2024-01-01T12:00:00.000000")]
    pub updated_at: String,
}

impl From<ItemModel> for ItemResponse {
    fn from(value: ItemModel) -> Self {
        ItemResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
            created_at: format_datetime(&value.created_at),
            updated_at: format_datetime(&value.updated_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct DeleteItemResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
    pub deleted_item: ItemResponse,
}

impl From<ItemModel> for DeleteItemResponse {
    fn from(value: ItemModel) -> Self {
        DeleteItemResponse {
            message: "Item deleted successfully".to_string(),
            deleted_item: ItemResponse::from(value),
        }
    }
}
