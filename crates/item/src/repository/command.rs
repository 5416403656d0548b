use crate::{
    abstract_trait::item::repository::ItemCommandRepositoryTrait,
    domain::requests::item::{CreateItemRequest, UpdateItemRequest},
    model::item::Item as ItemModel,
    repository::{ItemStore, next_update_stamp},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[async_trait]
impl ItemCommandRepositoryTrait for ItemStore {
    async fn create_item(&self, req: &CreateItemRequest) -> Result<ItemModel, RepositoryError> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let now = self.now();

        let item = ItemModel {
            id: state.last_id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            quantity: req.quantity,
            created_at: now,
            updated_at: now,
        };

        state.items.insert(item.id, item.clone());

        info!("🆕 Stored item ID {} ('{}')", item.id, item.name);

        Ok(item)
    }

    async fn update_item(
        &self,
        id: i64,
        req: &UpdateItemRequest,
    ) -> Result<ItemModel, RepositoryError> {
        let mut state = self.state.write().await;

        let Some(item) = state.items.get_mut(&id) else {
            error!("❌ Cannot update missing item ID {id}");
            return Err(RepositoryError::NotFound);
        };

        item.name = req.name.clone();
        item.description = req.description.clone();
        item.price = req.price;
        item.quantity = req.quantity;
        item.updated_at = next_update_stamp(self.now(), item.updated_at);

        info!("✏️ Replaced fields of item ID {id}");

        Ok(item.clone())
    }

    async fn delete_item(&self, id: i64) -> Result<ItemModel, RepositoryError> {
        let mut state = self.state.write().await;

        match state.items.remove(&id) {
            Some(item) => {
                info!("🗑️ Removed item ID {id}");
                Ok(item)
            }
            None => {
                error!("❌ Cannot delete missing item ID {id}");
                Err(RepositoryError::NotFound)
            }
        }
    }
}
