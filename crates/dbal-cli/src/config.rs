use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration loaded from dbal.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub cli: CliSettings,
}

/// CLI-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    /// Searched when a command is given no paths.
    #[serde(default = "default_schema_dir")]
    pub default_schema_dir: String,
    /// File extension, without the dot, matched inside directories.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            default_schema_dir: default_schema_dir(),
            extension: default_extension(),
        }
    }
}

fn default_schema_dir() -> String {
    "schemas/".to_string()
}

fn default_extension() -> String {
    "dbal".to_string()
}

impl CliConfig {
    /// The paths a command should read: the ones given, or the configured
    /// schema directory.
    pub fn paths_or_default(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        if paths.is_empty() {
            vec![PathBuf::from(&self.cli.default_schema_dir)]
        } else {
            paths.to_vec()
        }
    }
}

/// Discovery order for config file:
/// 1. `--config <path>` or `DBAL_CONFIG` (explicit, resolved by clap)
/// 2. `./dbal.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/dbal/config.toml`
/// 4. `~/.config/dbal/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("dbal.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("dbal/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/dbal/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}
