use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::ItemStore,
};
use prometheus_client::registry::Registry;
use shared::utils::{DynClock, SystemMetrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
    pub clock: DynClock,
    pub environment: String,
    pub platform: String,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .field("environment", &self.environment)
            .field("platform", &self.platform)
            .finish()
    }
}

impl AppState {
    /// The store and the status endpoints read time from the same clock.
    pub fn new(
        clock: DynClock,
        environment: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        let store = Arc::new(ItemStore::new(clock.clone()));
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(DependenciesInjectDeps { store }, &mut registry);

        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
            clock,
            environment: environment.into(),
            platform: platform.into(),
        }
    }
}
