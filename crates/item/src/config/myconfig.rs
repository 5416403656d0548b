use anyhow::{Context, Result, anyhow};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_PLATFORM: &str = "standalone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub platform: String,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `init` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16 integer, got '{value}'"))?,
            None => DEFAULT_PORT,
        };

        let environment = lookup("ENVIRONMENT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let platform = lookup("PLATFORM")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = match lookup("ENABLE_FILE_LOG").as_deref() {
            None | Some("") | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "ENABLE_FILE_LOG must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let otel_endpoint =
            lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|value| !value.trim().is_empty());

        Ok(Self {
            port,
            environment,
            platform,
            dev_mode,
            enable_file_log,
            otel_endpoint,
        })
    }
}
