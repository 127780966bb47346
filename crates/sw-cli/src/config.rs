//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use sw_core::DEFAULT_THRESHOLD;

/// Balances closer to zero than this are shown as settled.
pub const DEFAULT_SETTLE_TOLERANCE: f64 = 1.0;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON snapshot of records.
    pub snapshot_path: PathBuf,

    /// Spend/limit ratio at which a budget alert is raised.
    pub budget_threshold: f64,

    /// Absolute balance below which a group member counts as settled.
    pub settle_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            snapshot_path: data_dir.join("snapshot.json"),
            budget_threshold: DEFAULT_THRESHOLD,
            settle_tolerance: DEFAULT_SETTLE_TOLERANCE,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, then an optional file,
    /// then `SW_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SW_BUDGET_THRESHOLD, SW_SNAPSHOT_PATH, ...
        figment = figment.merge(Env::prefixed("SW_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for sw.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sw"))
}

/// Returns the platform-specific data directory for sw.
///
/// On Linux: `~/.local/share/sw`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("sw"))
}
