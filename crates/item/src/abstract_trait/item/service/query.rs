use crate::domain::response::item::ItemResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynItemQueryService = Arc<dyn ItemQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ItemQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ItemResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ItemResponse, ServiceError>;
    async fn count(&self) -> Result<usize, ServiceError>;
}
