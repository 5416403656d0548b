use crate::model::item::Item as ItemModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynItemQueryRepository = Arc<dyn ItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ItemQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ItemModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemModel>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
