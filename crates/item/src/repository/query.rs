use crate::{
    abstract_trait::item::repository::ItemQueryRepositoryTrait, model::item::Item as ItemModel,
    repository::ItemStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[async_trait]
impl ItemQueryRepositoryTrait for ItemStore {
    async fn find_all(&self) -> Result<Vec<ItemModel>, RepositoryError> {
        let state = self.state.read().await;

        info!("🔍 Snapshot of {} items", state.items.len());

        Ok(state.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemModel>, RepositoryError> {
        info!("🆔 Fetching item by ID: {id}");

        let state = self.state.read().await;

        Ok(state.items.get(&id).cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.state.read().await.items.len())
    }
}
