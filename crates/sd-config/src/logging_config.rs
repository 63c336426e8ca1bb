use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL};

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(deserialize_with = "lenient_level")]
    pub level: LevelFilter,
    pub dir: String,
    /// Log file name inside `dir`. None = stderr.
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // The log directory is created under the config dir; keep it there.
        let dir = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(format!(
                "logging.dir must be relative and cannot contain '..', got '{}'",
                self.dir
            )));
        }

        if let Some(ref file) = self.file {
            if file.is_empty() || file.contains('/') || file.contains('\\') {
                return Err(ConfigError::logging(format!(
                    "logging.file must be a bare file name, got '{file}'"
                )));
            }
        }

        Ok(())
    }
}

/// Accept any case and fall back to the default on unknown values rather
/// than failing startup over a log level typo.
fn lenient_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.parse().unwrap_or(DEFAULT_LOG_LEVEL))
}
