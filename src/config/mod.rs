//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::values::ValueCatalog;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".adal-week.json";

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_return_delay_ms() -> u64 {
    1500
}

/// @acp:summary "Main configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Replacement value catalog (built-in catalog when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Simulated submission time
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Pause before returning to the task list after a submission
    #[serde(default = "default_return_delay_ms")]
    pub return_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            submit_delay_ms: default_submit_delay_ms(),
            return_delay_ms: default_return_delay_ms(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from default location or fall back to defaults"
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Configured catalog, or the built-in one.
    ///
    /// A relative catalog path is taken relative to `base`.
    pub fn load_catalog(&self, base: &Path) -> crate::Result<ValueCatalog> {
        match &self.catalog {
            Some(path) if path.is_absolute() => ValueCatalog::load(path),
            Some(path) => ValueCatalog::load(base.join(path)),
            None => ValueCatalog::builtin(),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn return_delay(&self) -> Duration {
        Duration::from_millis(self.return_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = Config {
            catalog: Some(PathBuf::from("values.json")),
            submit_delay_ms: 10,
            return_delay_ms: 0,
        };
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("submitDelayMs"));
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_without_file() {
        // Tests run from the package root, which has no config file
        assert!(!Path::new(DEFAULT_CONFIG_FILE).exists());
        assert_eq!(Config::load_or_default(), Config::default());
    }

    #[test]
    fn test_builtin_catalog_without_path() {
        let catalog = Config::default().load_catalog(Path::new(".")).unwrap();
        assert_eq!(catalog.values.len(), 6);
    }

    #[test]
    fn test_relative_catalog_resolved_from_base() {
        let dir = tempfile::tempdir().unwrap();
        let builtin = ValueCatalog::builtin().unwrap();
        std::fs::write(
            dir.path().join("custom.json"),
            serde_json::to_string(&builtin).unwrap(),
        )
        .unwrap();

        let config = Config {
            catalog: Some(PathBuf::from("custom.json")),
            ..Default::default()
        };
        assert_eq!(config.load_catalog(dir.path()).unwrap(), builtin);
    }
}
