use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUDIT_RECENT_LIMIT, DEFAULT_REFERENCE_BALANCE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Account balance the drawdown criterion is measured against.
    pub reference_balance: f64,
    /// Default number of audit entries shown on the admin page.
    pub audit_recent_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reference_balance: DEFAULT_REFERENCE_BALANCE,
            audit_recent_limit: DEFAULT_AUDIT_RECENT_LIMIT,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.reference_balance <= 0.0 {
            return Err(ConfigError::catalog(format!(
                "catalog.reference_balance must be positive, got {}",
                self.reference_balance
            )));
        }

        if self.audit_recent_limit == 0 || self.audit_recent_limit > 1000 {
            return Err(ConfigError::catalog(format!(
                "catalog.audit_recent_limit must be 1-1000, got {}",
                self.audit_recent_limit
            )));
        }

        Ok(())
    }
}
