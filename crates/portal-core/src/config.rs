use chrono::{DateTime, Utc};
use shared_types::{FilterConfig, PortalConfig, PortalError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Default config file, relative to the working directory.
const CONFIG_PATH: &str = "portal.toml";

/// Environment variable overriding [`CONFIG_PATH`].
const CONFIG_ENV: &str = "PORTAL_CONFIG";

/// Location of the config file. `.env` is consulted before the process
/// environment is read.
pub fn config_path() -> PathBuf {
    let _ = dotenvy::dotenv();
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

pub fn parse_config(contents: &str) -> Result<PortalConfig, PortalError> {
    toml::from_str(contents).map_err(|e| PortalError::config(format!("Invalid portal config: {e}")))
}

pub fn read_config(path: &Path) -> Result<PortalConfig, PortalError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        PortalError::config(format!("Cannot read {}: {e}", path.display()))
            .with_field("path", path.display().to_string())
    })?;
    parse_config(&contents)
}

/// Load the config once and keep it for the life of the process.
///
/// A missing or unparseable file falls back to the page defaults.
pub fn load_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let path = config_path();
        match read_config(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded portal config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default portal config");
                PortalConfig::default()
            }
        }
    })
}

/// Opening filter of the approval queue.
pub fn approvals_filter(config: &PortalConfig) -> FilterConfig {
    FilterConfig::new()
        .with("status", config.approvals.status.clone())
        .with("priority", config.approvals.priority.clone())
}

/// Opening filter of user management.
pub fn users_filter(config: &PortalConfig) -> FilterConfig {
    FilterConfig::new()
        .with("role", config.users.role.clone())
        .with("status", config.users.status.clone())
}

/// Opening filter of the announcement board.
pub fn announcements_filter(config: &PortalConfig) -> FilterConfig {
    FilterConfig::new()
        .with("priority", config.announcements.priority.clone())
        .with("category", config.announcements.category.clone())
}

/// Opening filter of the activity log; the date window is resolved against `now`.
pub fn activity_filter(config: &PortalConfig, now: DateTime<Utc>) -> FilterConfig {
    FilterConfig::new()
        .with("type", config.activity.activity_type.clone())
        .within(config.activity.range, now)
}
