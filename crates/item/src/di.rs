use crate::{
    abstract_trait::item::service::{DynItemCommandService, DynItemQueryService},
    repository::ItemStore,
    service::{command::ItemCommandService, query::ItemQueryService},
};
use prometheus_client::registry::Registry;
use shared::utils::Metrics;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub item_query: DynItemQueryService,
    pub item_command: DynItemCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("item_query", &"ItemQueryService")
            .field("item_command", &"ItemCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: Arc<ItemStore>,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { store } = deps;

        let metrics = Metrics::new();
        metrics.register(registry);

        let item_query =
            Arc::new(ItemQueryService::new(store.clone(), metrics.clone())) as DynItemQueryService;

        let item_command =
            Arc::new(ItemCommandService::new(store, metrics)) as DynItemCommandService;

        Self {
            item_query,
            item_command,
        }
    }
}
