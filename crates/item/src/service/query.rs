use crate::{
    abstract_trait::item::{repository::DynItemQueryRepository, service::ItemQueryServiceTrait},
    domain::response::item::ItemResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ItemQueryService {
    pub query: DynItemQueryRepository,
    tracer: OperationTracer,
}

impl ItemQueryService {
    pub fn new(query: DynItemQueryRepository, metrics: Metrics) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("item-query-service", metrics),
        }
    }
}

#[async_trait]
impl ItemQueryServiceTrait for ItemQueryService {
    async fn find_all(&self) -> Result<Vec<ItemResponse>, ServiceError> {
        info!("🔍 Finding all items");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "item_find_all",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let items = match self.query.find_all().await {
            Ok(items) => items,
            Err(e) => {
                let msg = format!("Failed to list items: {e}");
                error!("❌ {msg}");
                self.tracer.complete_error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();

        self.tracer
            .complete_success(&tracing_ctx, method, "Items retrieved");
        info!("✅ Found {} items", data.len());

        Ok(data)
    }

    async fn find_by_id(&self, id: i64) -> Result<ItemResponse, ServiceError> {
        info!("🆔 Finding item by ID: {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "item_find_by_id",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(item)) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Item retrieved");
                info!("✅ Item retrieved: '{}' (ID: {id})", item.name);
                Ok(ItemResponse::from(item))
            }
            Ok(None) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Item not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let msg = format!("Failed to fetch item ID {id}: {e}");
                error!("❌ {msg}");
                self.tracer.complete_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.query.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::item::service::ItemCommandServiceTrait,
        domain::requests::item::{CreateItemRequest, UpdateItemRequest},
        repository::ItemStore,
        service::command::ItemCommandService,
    };
    use shared::utils::{Labels, Status, SystemClock};
    use std::sync::Arc;

    fn services() -> (ItemQueryService, ItemCommandService, Metrics) {
        let store = Arc::new(ItemStore::new(Arc::new(SystemClock)));
        let metrics = Metrics::new();
        (
            ItemQueryService::new(store.clone(), metrics.clone()),
            ItemCommandService::new(store, metrics.clone()),
            metrics,
        )
    }

    #[tokio::test]
    async fn create_then_get_round_trips_every_field() {
        let (query, command, _) = services();

        let created = command
            .create_item(&CreateItemRequest {
                name: "Gadget".into(),
                description: Some("Shiny".into()),
                price: 3.25,
                quantity: 7,
            })
            .await
            .unwrap();

        let fetched = query.find_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Gadget");
        assert_eq!(fetched.description.as_deref(), Some("Shiny"));
        assert_eq!(fetched.price, 3.25);
        assert_eq!(fetched.quantity, 7);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn not_found_surfaces_as_service_error() {
        let (query, command, metrics) = services();

        let err = query.find_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());

        let err = command
            .update_item(
                99,
                &UpdateItemRequest {
                    name: "x".into(),
                    description: None,
                    price: 1.0,
                    quantity: 0,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = command.delete_item(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Repository error: Item not found");

        let failed_lookup = Labels {
            operation: "item_find_by_id".into(),
            method: Method::Get,
            status: Status::Error,
        };
        assert_eq!(metrics.request_counter.get_or_create(&failed_lookup).get(), 1);
    }

    #[tokio::test]
    async fn delete_echoes_the_removed_item() {
        let (query, command, _) = services();

        let created = command
            .create_item(&CreateItemRequest {
                name: "Bolt".into(),
                description: None,
                price: 0.1,
                quantity: 100,
            })
            .await
            .unwrap();

        let deleted = command.delete_item(created.id).await.unwrap();

        assert_eq!(deleted.message, "Item deleted successfully");
        assert_eq!(deleted.deleted_item, created);
        assert_eq!(query.count().await.unwrap(), 0);
        assert!(query.find_all().await.unwrap().is_empty());
    }
}
