//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternbook/patternbook.toml`
//! 3. Environment variables: `PATTERNBOOK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::OsVariant;
use crate::util::path::expand_env_vars;

pub const DEFAULT_ORDER: &str = "Move out";

/// Raw settings for intermediate parsing (`None` → not specified, keep current).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub hierarchy: Option<PathBuf>,
    pub order: Option<String>,
    pub os: Option<String>,
}

/// Unified configuration for patternbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Hierarchy file used by `brief` and `tree` (default: built-in division)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<PathBuf>,
    /// Order given when none is passed on the command line
    pub order: String,
    /// Phone OS ordered when none is passed on the command line
    pub os: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hierarchy: None,
            order: DEFAULT_ORDER.to_string(),
            os: OsVariant::Android.os_identity().to_string(),
        }
    }
}

/// Get the XDG config directory for patternbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternbook.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence, reading the global config from
    /// its XDG location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence from an explicit global file.
    ///
    /// A missing file is not an error, it simply contributes nothing.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global {
            if path.exists() {
                debug!("loading global config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            hierarchy: overlay.hierarchy.clone().or_else(|| self.hierarchy.clone()),
            order: overlay.order.clone().unwrap_or_else(|| self.order.clone()),
            os: overlay.os.clone().unwrap_or_else(|| self.os.clone()),
        }
    }

    /// Apply PATTERNBOOK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("PATTERNBOOK"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("hierarchy") {
            settings.hierarchy = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("order") {
            settings.order = val;
        }
        if let Ok(val) = config.get_string("os") {
            settings.os = val;
        }

        Ok(settings)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in the hierarchy path.
    fn expand_paths(&mut self) {
        if let Some(hierarchy) = &self.hierarchy {
            let expanded = expand_env_vars(hierarchy.to_string_lossy().as_ref());
            self.hierarchy = Some(PathBuf::from(expanded));
        }
    }

    /// The configured phone OS.
    pub fn os_variant(&self) -> Result<OsVariant, ApplicationError> {
        Ok(self.os.parse()?)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patternbook configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/patternbook/patternbook.toml
#   Env:    PATTERNBOOK_* environment variables (explicit overrides)

# Hierarchy file used by `brief` and `tree` (built-in division when unset)
# hierarchy = "~/org/1st-division.toml"

# Order given when none is passed on the command line
# order = "Move out"

# Phone OS ordered when none is passed: android or google
# os = "android"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
