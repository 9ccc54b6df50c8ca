use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::domain::order::ManagerConfig;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Read from the environment:
// - PRODUCTION_ORDERS_LOG          default log filter (RUST_LOG still wins)
// - PRODUCTION_ORDERS_CATALOG      JSON catalog path, sample catalog if unset
// - PRODUCTION_ORDERS_STRICT_IDS   reject product ids shared between lines
//
// ============================================================================

pub const LOG_ENV: &str = "PRODUCTION_ORDERS_LOG";
pub const CATALOG_ENV: &str = "PRODUCTION_ORDERS_CATALOG";
pub const STRICT_IDS_ENV: &str = "PRODUCTION_ORDERS_STRICT_IDS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub catalog_path: Option<PathBuf>,
    pub manager: ManagerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info,production_orders=debug".to_string(),
            catalog_path: None,
            manager: ManagerConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup(STRICT_IDS_ENV) {
            config.manager.reject_cross_line_duplicates =
                parse_flag(&flag).with_context(|| format!("Invalid value for {STRICT_IDS_ENV}"))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
