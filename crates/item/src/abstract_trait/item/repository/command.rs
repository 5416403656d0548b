use crate::{
    domain::requests::item::{CreateItemRequest, UpdateItemRequest},
    model::item::Item as ItemModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynItemCommandRepository = Arc<dyn ItemCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ItemCommandRepositoryTrait {
    async fn create_item(&self, req: &CreateItemRequest) -> Result<ItemModel, RepositoryError>;
    async fn update_item(
        &self,
        id: i64,
        req: &UpdateItemRequest,
    ) -> Result<ItemModel, RepositoryError>;
    async fn delete_item(&self, id: i64) -> Result<ItemModel, RepositoryError>;
}
