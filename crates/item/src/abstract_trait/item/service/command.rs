use crate::domain::{
    requests::item::{CreateItemRequest, UpdateItemRequest},
    response::item::{DeleteItemResponse, ItemResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynItemCommandService = Arc<dyn ItemCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ItemCommandServiceTrait {
    async fn create_item(&self, req: &CreateItemRequest) -> Result<ItemResponse, ServiceError>;
    async fn update_item(
        &self,
        id: i64,
        req: &UpdateItemRequest,
    ) -> Result<ItemResponse, ServiceError>;
    async fn delete_item(&self, id: i64) -> Result<DeleteItemResponse, ServiceError>;
}
