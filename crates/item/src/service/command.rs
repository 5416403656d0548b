use crate::{
    abstract_trait::item::{
        repository::DynItemCommandRepository, service::ItemCommandServiceTrait,
    },
    domain::{
        requests::item::{CreateItemRequest, UpdateItemRequest},
        response::item::{DeleteItemResponse, ItemResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ItemCommandService {
    pub command: DynItemCommandRepository,
    tracer: OperationTracer,
}

impl ItemCommandService {
    pub fn new(command: DynItemCommandRepository, metrics: Metrics) -> Self {
        Self {
            command,
            tracer: OperationTracer::new("item-command-service", metrics),
        }
    }
}

#[async_trait]
impl ItemCommandServiceTrait for ItemCommandService {
    async fn create_item(&self, req: &CreateItemRequest) -> Result<ItemResponse, ServiceError> {
        info!("🏗️ Creating item: '{}'", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "item_create",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("operation", "create"),
                KeyValue::new("item.name", req.name.clone()),
            ],
        );

        match self.command.create_item(req).await {
            Ok(item) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Item created");
                info!("✅ Item created: '{}' (ID: {})", item.name, item.id);
                Ok(ItemResponse::from(item))
            }
            Err(e) => {
                let msg = format!("Failed to create item '{}': {e}", req.name);
                error!("❌ {msg}");
                self.tracer.complete_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_item(
        &self,
        id: i64,
        req: &UpdateItemRequest,
    ) -> Result<ItemResponse, ServiceError> {
        info!("✏️ Updating item ID: {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "item_update",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("operation", "update"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        match self.command.update_item(id, req).await {
            Ok(item) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Item updated");
                info!("✅ Item updated: '{}' (ID: {id})", item.name);
                Ok(ItemResponse::from(item))
            }
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_item(&self, id: i64) -> Result<DeleteItemResponse, ServiceError> {
        info!("🗑️ Deleting item ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "item_delete",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        match self.command.delete_item(id).await {
            Ok(item) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Item deleted");
                info!("✅ Item deleted: '{}' (ID: {id})", item.name);
                Ok(DeleteItemResponse::from(item))
            }
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
