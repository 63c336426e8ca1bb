mod auth_config;
mod catalog_config;
mod config;
mod error;
mod logging_config;

pub use auth_config::AuthConfig;
pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::LoggingConfig;

const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
const DEFAULT_SEED_DEMO_USERS: bool = true;
const DEFAULT_REFERENCE_BALANCE: f64 = 25_000.0;
const DEFAULT_AUDIT_RECENT_LIMIT: usize = 50;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
