use crate::{AuthConfig, CatalogConfig, ConfigError, ConfigErrorResult, LoggingConfig};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SD_CONFIG_DIR env var, else use ./.sd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.warn_on_legacy_config(&config_path);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SD_CONFIG_DIR env var > ./.sd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("SD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sd"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  auth: password_min_length={}, seed_demo_users={}",
            self.auth.password_min_length, self.auth.seed_demo_users
        );
        info!(
            "  catalog: reference_balance={}, audit_recent_limit={}",
            self.catalog.reference_balance, self.catalog.audit_recent_limit
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    /// An earlier layout kept config in the home directory; point users at
    /// the new location if the old file is still around.
    fn warn_on_legacy_config(&self, config_path: &PathBuf) {
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".sd").join("config.toml");
            if legacy.exists() && legacy != *config_path {
                warn!(
                    "Ignoring legacy config at {}; using {}",
                    legacy.display(),
                    config_path.display()
                );
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        // Auth
        Self::apply_env_parse(
            "SD_AUTH_PASSWORD_MIN_LENGTH",
            &mut self.auth.password_min_length,
        );
        Self::apply_env_bool("SD_AUTH_SEED_DEMO_USERS", &mut self.auth.seed_demo_users);

        // Catalog
        Self::apply_env_parse(
            "SD_CATALOG_REFERENCE_BALANCE",
            &mut self.catalog.reference_balance,
        );
        Self::apply_env_parse(
            "SD_CATALOG_AUDIT_RECENT_LIMIT",
            &mut self.catalog.audit_recent_limit,
        );

        // Logging
        Self::apply_env_parse("SD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
