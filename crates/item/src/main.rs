use anyhow::{Context, Result};
use item::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::utils::{LogOptions, SystemClock, Telemetry, init_logger, run_metrics_collector};
use std::sync::Arc;
use tracing::{error, info};

const SERVICE_NAME: &str = "item-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init(SERVICE_NAME, endpoint).context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        LogOptions {
            is_dev: config.dev_mode,
            enable_file: config.enable_file_log,
        },
    );

    info!(
        "🚀 Starting Item Service ({} environment)...",
        config.environment
    );

    let state = AppState::new(
        Arc::new(SystemClock),
        config.environment.clone(),
        config.platform.clone(),
    );

    tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down Item Service...");

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Item Service shutdown complete.");

    Ok(())
}
