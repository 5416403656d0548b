mod clock;
mod datetime;
mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;

pub use self::clock::{Clock, DynClock, SystemClock};
pub use self::datetime::{DATETIME_FORMAT, format_datetime};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::{LogOptions, init_logger};
pub use self::metrics::{Labels, Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::{OperationTracer, Telemetry, TracingContext};
